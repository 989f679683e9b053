use crate::geometry::{Arc, Line};
use crate::host::GeometryReference;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Key of an edge in a [`TopologyStore`](super::TopologyStore).
    pub struct EdgeId;
}

/// Carrier curve of an edge. Only [`EdgeCurve::Line`] edges can be wall
/// ends.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    Line(Line),
    Arc(Arc),
}

/// A bounded piece of a curve between two vertices.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub start: VertexId,
    pub end: VertexId,
    pub curve: EdgeCurve,
    /// Curve parameter at `start`.
    pub t_start: f64,
    /// Curve parameter at `end`.
    pub t_end: f64,
    /// Set when the geometry was requested with references.
    pub reference: Option<GeometryReference>,
}
