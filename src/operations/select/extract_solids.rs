use tracing::debug;

use crate::error::Result;
use crate::shape::{GeometryObject, Shape};
use crate::topology::SolidId;

/// Collects the solids of a shape that can carry faces.
///
/// Hosts emit empty placeholder solids alongside real geometry; only solids
/// with a positive volume and at least one face are kept. Output order is
/// the shape's enumeration order. Nested instances are not descended into.
pub struct ExtractSolids<'a> {
    shape: &'a Shape,
}

impl<'a> ExtractSolids<'a> {
    /// Creates a new `ExtractSolids` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the query. An empty shape yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if a solid references a shell missing from the store.
    pub fn execute(&self) -> Result<Vec<SolidId>> {
        let store = self.shape.store();
        let mut solids = Vec::new();
        for object in self.shape.objects() {
            let GeometryObject::Solid(id) = object else {
                continue;
            };
            let volume = store.solid(*id)?.volume;
            let face_count = store.solid_faces(*id)?.len();
            if volume > 0.0 && face_count > 0 {
                solids.push(*id);
            } else {
                debug!(volume, face_count, "skipping empty solid");
            }
        }
        debug!(count = solids.len(), "extracted solids");
        Ok(solids)
    }
}
