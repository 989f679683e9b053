//! Geometry trees as handed out by the host.
//!
//! A [`Shape`] owns one [`TopologyStore`] and an ordered list of top-level
//! [`GeometryObject`]s. The order is the host's enumeration order and is
//! load-bearing: solid extraction preserves it and special-reference
//! sampling takes the first usable object in it.

use crate::host::GeometryReference;
use crate::math::Point3;
use crate::topology::{EdgeId, SolidId, TopologyStore};

/// Precision at which the host decomposes geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// Let the host pick (used for symbol geometry).
    #[default]
    Undefined,
    Coarse,
    Medium,
    Fine,
}

/// How a geometry query should be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryOptions {
    /// Attach a [`GeometryReference`] to every face, edge, curve and point.
    pub compute_references: bool,
    /// Decomposition precision.
    pub detail_level: DetailLevel,
    /// Also return invisible sub-geometry such as reference planes.
    pub include_non_visible: bool,
}

impl GeometryOptions {
    /// Options used to read a wall's faces and edges.
    #[must_use]
    pub fn wall_faces() -> Self {
        Self {
            compute_references: true,
            detail_level: DetailLevel::Fine,
            include_non_visible: false,
        }
    }

    /// Options used to sample references from a family instance's symbol.
    #[must_use]
    pub fn symbol_references() -> Self {
        Self {
            compute_references: true,
            detail_level: DetailLevel::Undefined,
            include_non_visible: true,
        }
    }
}

/// A free-standing curve in a geometry tree.
#[derive(Debug, Clone)]
pub struct CurveObject {
    /// The edge carrying the curve, stored in the owning shape's store.
    pub edge: EdgeId,
    /// Host reference to the curve, when references were computed.
    pub reference: Option<GeometryReference>,
}

/// A free-standing point in a geometry tree.
#[derive(Debug, Clone)]
pub struct PointObject {
    pub position: Point3,
    pub reference: Option<GeometryReference>,
}

/// A placed copy of a family symbol's geometry.
#[derive(Debug, Clone)]
pub struct GeometryInstance {
    symbol: Option<Box<Shape>>,
}

impl GeometryInstance {
    /// Creates an instance of the given symbol geometry.
    #[must_use]
    pub fn new(symbol: Shape) -> Self {
        Self {
            symbol: Some(Box::new(symbol)),
        }
    }

    /// Creates an instance whose symbol geometry the host could not supply.
    #[must_use]
    pub fn without_symbol() -> Self {
        Self { symbol: None }
    }

    /// Returns the symbol geometry, in symbol coordinates.
    #[must_use]
    pub fn symbol_geometry(&self) -> Option<&Shape> {
        self.symbol.as_deref()
    }
}

/// One top-level entry of a geometry tree.
#[derive(Debug, Clone)]
pub enum GeometryObject {
    Solid(SolidId),
    Curve(CurveObject),
    Point(PointObject),
    Instance(GeometryInstance),
}

/// An element's decomposed geometry.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    store: TopologyStore,
    objects: Vec<GeometryObject>,
}

impl Shape {
    /// Creates a shape from a store and its top-level objects.
    #[must_use]
    pub fn new(store: TopologyStore, objects: Vec<GeometryObject>) -> Self {
        Self { store, objects }
    }

    /// Returns the topology store that the objects' IDs index into.
    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    /// Returns the top-level objects in enumeration order.
    #[must_use]
    pub fn objects(&self) -> &[GeometryObject] {
        &self.objects
    }

    /// Returns `true` if the shape has no top-level objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
