use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Curve;
use crate::math::{is_parallel_to, Vector3, UP, VECTOR_TOLERANCE};
use crate::operations::query::Length;
use crate::topology::{EdgeCurve, EdgeId, FaceId, TopologyStore};

/// A vertical edge together with its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEdge {
    pub edge: EdgeId,
    pub length: f64,
}

/// The two longest vertical edges of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalEdgePair {
    /// The longest edge.
    pub first: EdgeId,
    /// The second-longest edge.
    pub second: EdgeId,
}

/// Classifies and ranks the vertical edges on a face's outer boundary.
///
/// Only straight edges count; an edge is vertical when its direction is
/// almost equal to the up axis or its negation. Curved edges are dropped
/// without error.
pub struct VerticalEdges {
    face: FaceId,
    axis: Vector3,
    tolerance: f64,
}

impl VerticalEdges {
    /// Creates a new `VerticalEdges` query against the global up axis.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            axis: UP,
            tolerance: VECTOR_TOLERANCE,
        }
    }

    /// Overrides the direction comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns every vertical edge of the outer loop, longest first.
    ///
    /// Edges of equal length keep their loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face, its outer wire or an edge is missing.
    pub fn ranked(&self, store: &TopologyStore) -> Result<Vec<RankedEdge>> {
        let face = store.face(self.face)?;
        let wire = store.wire(face.outer_wire)?;

        let mut ranked = Vec::new();
        for oe in &wire.edges {
            let edge = store.edge(oe.edge)?;
            let EdgeCurve::Line(line) = &edge.curve else {
                continue;
            };
            if is_parallel_to(&line.direction_at(edge.t_start)?, &self.axis, self.tolerance) {
                ranked.push(RankedEdge {
                    edge: oe.edge,
                    length: Length::new(oe.edge).execute(store)?,
                });
            }
        }
        ranked.sort_by(|a, b| b.length.total_cmp(&a.length));
        Ok(ranked)
    }

    /// Executes the query, returning the two longest vertical edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InsufficientVerticalEdges`] when fewer than
    /// two vertical edges exist.
    pub fn execute(&self, store: &TopologyStore) -> Result<VerticalEdgePair> {
        let ranked = self.ranked(store)?;
        debug!(count = ranked.len(), "vertical edges on selected face");
        match ranked.as_slice() {
            [first, second, ..] => Ok(VerticalEdgePair {
                first: first.edge,
                second: second.edge,
            }),
            _ => Err(GeometryError::InsufficientVerticalEdges {
                found: ranked.len(),
            }
            .into()),
        }
    }
}
