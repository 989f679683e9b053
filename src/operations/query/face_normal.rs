use crate::error::Result;
use crate::geometry::Surface;
use crate::math::Vector3;
use crate::topology::{FaceId, FaceSurface, TopologyStore};

/// Reads the outward normal of a planar face.
pub struct FaceNormal {
    face: FaceId,
}

impl FaceNormal {
    /// Creates a new `FaceNormal` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// Returns `None` for non-planar faces, whose normal varies across the
    /// face. The plane normal is flipped when the face is reversed relative
    /// to its surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<Vector3>> {
        let face = store.face(self.face)?;
        let FaceSurface::Plane(plane) = &face.surface else {
            return Ok(None);
        };
        let normal = plane.normal_at(0.0, 0.0)?;
        Ok(Some(if face.same_sense { normal } else { -normal }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Cylinder, Plane};
    use crate::math::Point3;
    use crate::topology::{FaceData, WireData};

    fn face(store: &mut TopologyStore, surface: FaceSurface, same_sense: bool) -> FaceId {
        let wire = store.add_wire(WireData {
            edges: vec![],
            is_closed: true,
        });
        store.add_face(FaceData {
            surface,
            outer_wire: wire,
            inner_wires: vec![],
            same_sense,
            reference: None,
        })
    }

    #[test]
    fn reversed_face_flips_normal() {
        let mut store = TopologyStore::new();
        let plane = Plane::from_normal(Point3::origin(), Vector3::y()).unwrap();
        let id = face(&mut store, FaceSurface::Plane(plane), false);
        let n = FaceNormal::new(id).execute(&store).unwrap().unwrap();
        assert!((n + Vector3::y()).norm() < 1e-12);
    }

    #[test]
    fn cylinder_has_no_face_normal() {
        let mut store = TopologyStore::new();
        let cyl = Cylinder::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x()).unwrap();
        let id = face(&mut store, FaceSurface::Cylinder(cyl), true);
        assert!(FaceNormal::new(id).execute(&store).unwrap().is_none());
    }
}
