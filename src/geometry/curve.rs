use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A parametric curve carrying an edge.
///
/// The bounding parameters live on the edge, not on the curve.
pub trait Curve {
    /// The point at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// The unit direction of travel at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] where the curve has no
    /// direction.
    fn direction_at(&self, t: f64) -> Result<Vector3>;
}

fn unit(v: Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// A straight line, parameterized by arc length from `origin`.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates the line through `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero direction.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        Ok(Self {
            origin,
            direction: unit(direction)?,
        })
    }

    /// The line from `start` towards `end`; `end` sits at `t = |end - start|`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the points coincide.
    pub fn through(start: Point3, end: Point3) -> Result<Self> {
        Self::new(start, end - start)
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    fn direction_at(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction)
    }
}

/// A circle parameterized by angle, zero at `start_dir`, turning
/// counter-clockwise about `axis`.
///
/// Edges on an arc store their sweep as the angular range `[t_start, t_end]`,
/// so the arc length of an edge is `radius * |t_end - t_start|`.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_dir: Vector3,
    quarter_dir: Vector3,
}

impl Arc {
    /// Creates an arc.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a non-positive radius or a
    /// `start_dir` that is not perpendicular to `axis`, and
    /// [`GeometryError::ZeroVector`] for a zero axis or start direction.
    pub fn new(center: Point3, radius: f64, axis: Vector3, start_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!("arc radius {radius}")).into());
        }
        let axis = unit(axis)?;
        let start_dir = unit(start_dir)?;
        if axis.dot(&start_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "arc start direction leaves the arc plane".into(),
            )
            .into());
        }
        Ok(Self {
            center,
            radius,
            start_dir,
            quarter_dir: axis.cross(&start_dir),
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Arc {
    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + (self.start_dir * cos + self.quarter_dir * sin) * self.radius
    }

    fn direction_at(&self, t: f64) -> Result<Vector3> {
        let (sin, cos) = t.sin_cos();
        unit(self.quarter_dir * cos - self.start_dir * sin)
    }
}
