use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Key of a wire in a [`TopologyStore`](super::TopologyStore).
    pub struct WireId;
}

/// One use of an edge inside a loop.
#[derive(Debug, Clone, Copy)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    /// Traversed from the edge's start vertex to its end vertex.
    pub forward: bool,
}

impl OrientedEdge {
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// A chain of edges; a face boundary when closed.
///
/// Edge order is the host's loop order, which vertical edge ranking keeps
/// for edges of equal length.
#[derive(Debug, Clone)]
pub struct WireData {
    pub edges: Vec<OrientedEdge>,
    pub is_closed: bool,
}
