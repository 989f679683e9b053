pub mod polygon;
pub mod vector;

pub use polygon::{polygon_area, polygon_normal};
pub use vector::{is_almost_equal, is_parallel_to, UP};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance for deciding whether two unit vectors are "almost equal".
///
/// Matches the looseness CAD hosts use for direction comparisons, which is
/// coarser than [`TOLERANCE`] so that normals recovered from modelled
/// geometry still compare equal to their nominal direction.
pub const VECTOR_TOLERANCE: f64 = 1e-9;
