use tracing::debug;

use crate::error::Result;
use crate::math::{is_almost_equal, Vector3, VECTOR_TOLERANCE};
use crate::operations::query::FaceNormal;
use crate::topology::{FaceId, SolidId, TopologyStore};

/// Finds the planar face whose outward normal matches an orientation.
///
/// Faces are visited solid by solid, each solid's faces in stored order.
/// When several faces match, the **last** one visited is returned; a wall
/// split into several solids therefore yields the face of the last solid.
/// Non-planar faces are skipped even if their normal would match somewhere.
pub struct SelectFace<'a> {
    solids: &'a [SolidId],
    orientation: Vector3,
    tolerance: f64,
}

impl<'a> SelectFace<'a> {
    /// Creates a new `SelectFace` query with [`VECTOR_TOLERANCE`].
    #[must_use]
    pub fn new(solids: &'a [SolidId], orientation: Vector3) -> Self {
        Self {
            solids,
            orientation,
            tolerance: VECTOR_TOLERANCE,
        }
    }

    /// Overrides the normal comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query. `Ok(None)` means no face matched.
    ///
    /// # Errors
    ///
    /// Returns an error if a solid or face is missing from the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<FaceId>> {
        let mut selected = None;
        for &solid in self.solids {
            for face in store.solid_faces(solid)? {
                let Some(normal) = FaceNormal::new(face).execute(store)? else {
                    continue;
                };
                if is_almost_equal(&normal, &self.orientation, self.tolerance) {
                    if selected.is_some() {
                        debug!("several faces match the orientation, keeping the later one");
                    }
                    selected = Some(face);
                }
            }
        }
        Ok(selected)
    }
}
