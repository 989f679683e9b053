use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Newell's area vector of a closed polygon.
///
/// Its direction is the polygon normal (right-hand rule over the point
/// order) and its length is twice the enclosed area.
#[must_use]
pub fn newell_vector(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Unit normal of a planar polygon.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] for polygons with no area.
pub fn polygon_normal(points: &[Point3]) -> Result<Vector3> {
    let normal = newell_vector(points);
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate("polygon has zero area".into()).into());
    }
    Ok(normal / len)
}

/// Enclosed area of a planar polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    newell_vector(points).norm() / 2.0
}
