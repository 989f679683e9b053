use crate::error::{OperationError, Result};
use crate::math::{polygon_area, polygon_normal, Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{FaceId, ShellData, SolidId, TopologyStore};

/// Extrudes a planar face along a direction vector into a closed prism.
///
/// The resulting shell lists its faces as bottom, top, then one side face
/// per profile edge in profile order. All face normals point outward.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// The solid's volume is the profile area times the extrusion depth
    /// measured along the profile normal.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length,
    /// lies in the profile plane, or the face has holes.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let base_points = store.wire_points(face.outer_wire)?;

        let normal = polygon_normal(&base_points)?;
        let depth = normal.dot(&self.direction);
        if depth.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the profile plane".into(),
            )
            .into());
        }

        // Orient the base so its normal agrees with the direction: the
        // reversed base then faces away (bottom) and side quads face outward.
        let base_points: Vec<Point3> = if depth > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        let top_points: Vec<Point3> = base_points.iter().map(|p| p + self.direction).collect();

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(make_planar_face(store, &bottom_points)?);
        faces.push(make_planar_face(store, &top_points)?);
        for i in 0..n {
            let j = (i + 1) % n;
            let quad = [base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(make_planar_face(store, &quad)?);
        }

        let shell = store.add_shell(ShellData {
            faces,
            is_closed: true,
        });
        let volume = polygon_area(&base_points) * depth.abs();
        MakeSolid::new(shell).with_volume(volume).execute(store)
    }
}

fn make_planar_face(store: &mut TopologyStore, points: &[Point3]) -> Result<FaceId> {
    let wire = MakeWire::new(points.to_vec(), true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
