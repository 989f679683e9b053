mod chain;
mod wall;

pub use chain::{PlacementLine, ReferenceChain, ReferenceChainBuilder};
pub use wall::{DimensionPlan, DimensionWall};
