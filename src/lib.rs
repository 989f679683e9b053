pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;
pub mod shape;
pub mod topology;

pub use config::DimensionConfig;
pub use error::{Result, WallDimError};
pub use operations::dimension::{DimensionPlan, DimensionWall, PlacementLine, ReferenceChain};
pub use operations::reference::{SpecialReferenceKind, StableReference};
