//! Locating the wall-side geometry a dimension is anchored to.
//!
//! The three stages run in order: [`ExtractSolids`] filters the wall's
//! geometry tree, [`SelectFace`] picks the face looking along the wall
//! orientation, and [`VerticalEdges`] ranks that face's vertical boundary
//! edges.

mod extract_solids;
mod select_face;
mod vertical_edges;

pub use extract_solids::ExtractSolids;
pub use select_face::SelectFace;
pub use vertical_edges::{RankedEdge, VerticalEdgePair, VerticalEdges};
