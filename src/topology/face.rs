use crate::geometry::{Cylinder, Plane};
use crate::host::GeometryReference;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Key of a face in a [`TopologyStore`](super::TopologyStore).
    pub struct FaceId;
}

/// Carrier surface of a face. Only planar faces have a single normal to
/// compare against a wall's orientation.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    Plane(Plane),
    Cylinder(Cylinder),
}

/// A trimmed region of a surface.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub surface: FaceSurface,
    /// Boundary loop; its edges are searched for wall ends.
    pub outer_wire: WireId,
    /// Hole loops.
    pub inner_wires: Vec<WireId>,
    /// `false` when the face points against its surface normal.
    pub same_sense: bool,
    /// Set when the geometry was requested with references.
    pub reference: Option<GeometryReference>,
}
