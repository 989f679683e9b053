use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A parametric surface carrying a face.
pub trait Surface {
    /// The point at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// The unit surface normal at `(u, v)`, before any face reversal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] where the normal is undefined.
    fn normal_at(&self, u: f64, v: f64) -> Result<Vector3>;
}

/// An unbounded plane.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
    u_dir: Vector3,
    v_dir: Vector3,
}

impl Plane {
    /// Creates the plane through `origin` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero normal.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        let helper = if normal.z.abs() < 0.9 { Vector3::z() } else { Vector3::x() };
        let u_dir = helper.cross(&normal).normalize();
        Ok(Self {
            origin,
            normal,
            u_dir,
            v_dir: normal.cross(&u_dir),
        })
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }
}

impl Surface for Plane {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_dir * u + self.v_dir * v
    }

    fn normal_at(&self, _u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.normal)
    }
}

/// A cylinder; `u` is the angle around `axis` from `ref_dir`, `v` the
/// height along `axis`.
#[derive(Debug, Clone)]
pub struct Cylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    ref_dir: Vector3,
}

impl Cylinder {
    /// Creates a cylinder.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a non-positive radius or a
    /// `ref_dir` not perpendicular to `axis`, and
    /// [`GeometryError::ZeroVector`] for a zero axis or reference direction.
    pub fn new(center: Point3, radius: f64, axis: Vector3, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!("cylinder radius {radius}")).into());
        }
        let (axis_len, ref_len) = (axis.norm(), ref_dir.norm());
        if axis_len < TOLERANCE || ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let (axis, ref_dir) = (axis / axis_len, ref_dir / ref_len);
        if axis.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "cylinder reference direction is not radial".into(),
            )
            .into());
        }
        Ok(Self {
            center,
            radius,
            axis,
            ref_dir,
        })
    }

    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    fn radial(&self, u: f64) -> Vector3 {
        let (sin, cos) = u.sin_cos();
        self.ref_dir * cos + self.axis.cross(&self.ref_dir) * sin
    }
}

impl Surface for Cylinder {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.center + self.radial(u) * self.radius + self.axis * v
    }

    fn normal_at(&self, u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.radial(u))
    }
}
