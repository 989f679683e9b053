use crate::error::Result;
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

/// Computes the length of an edge's curve between its bounding parameters.
pub struct Length {
    edge: EdgeId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query, returning the curve length.
    ///
    /// Lines are parameterized by arc length, so the length is
    /// `|t_end - t_start|`; arcs by angle, so it is `radius * |sweep|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let edge = store.edge(self.edge)?;
        let span = (edge.t_end - edge.t_start).abs();
        Ok(match &edge.curve {
            EdgeCurve::Line(_) => span,
            EdgeCurve::Arc(arc) => arc.radius() * span,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Arc;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;
    use crate::topology::{EdgeData, VertexData};
    use std::f64::consts::PI;

    #[test]
    fn line_length_3_4_5() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 4.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();
        let edge_id = store.wire(wire).unwrap().edges[0].edge;

        let len = Length::new(edge_id).execute(&store).unwrap();
        assert!((len - 5.0).abs() < 1e-10);
    }

    #[test]
    fn arc_length_uses_radius() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(2.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(-2.0, 0.0, 0.0)));
        let arc = Arc::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let edge = store.add_edge(EdgeData {
            start: a,
            end: b,
            curve: EdgeCurve::Arc(arc),
            t_start: 0.0,
            t_end: PI,
            reference: None,
        });

        let len = Length::new(edge).execute(&store).unwrap();
        assert!((len - 2.0 * PI).abs() < 1e-10);
    }
}
