use super::Vector3;

/// The global up axis (+Z).
pub const UP: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Returns `true` if `a` and `b` are within `tolerance` of each other.
///
/// The distance is Euclidean, so the check is independent of axis alignment.
#[must_use]
pub fn is_almost_equal(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

/// Returns `true` if `direction` is almost equal to `axis` or to `-axis`.
#[must_use]
pub fn is_parallel_to(direction: &Vector3, axis: &Vector3, tolerance: f64) -> bool {
    is_almost_equal(direction, axis, tolerance) || is_almost_equal(direction, &-axis, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::VECTOR_TOLERANCE;

    #[test]
    fn equal_within_tolerance() {
        let a = Vector3::new(0.0, 1.0, 0.0);
        let b = Vector3::new(0.0, 1.0 + 1e-12, 0.0);
        assert!(is_almost_equal(&a, &b, VECTOR_TOLERANCE));
    }

    #[test]
    fn not_equal_outside_tolerance() {
        let a = Vector3::new(0.0, 1.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 1e-6);
        assert!(!is_almost_equal(&a, &b, VECTOR_TOLERANCE));
    }

    #[test]
    fn parallel_accepts_both_signs() {
        assert!(is_parallel_to(&UP, &UP, VECTOR_TOLERANCE));
        assert!(is_parallel_to(&-UP, &UP, VECTOR_TOLERANCE));
        assert!(!is_parallel_to(&Vector3::x(), &UP, VECTOR_TOLERANCE));
    }
}
