//! The seam to the CAD host.
//!
//! Everything the dimensioning pipeline needs from the host document is
//! expressed by [`HostDocument`] and [`Selection`]. The pipeline receives
//! them as explicit arguments, so geometry code never reaches for ambient
//! document state and can run against [`MemoryDocument`] in tests.

mod memory;

pub use memory::{CommittedDimension, MemoryDocument, OpeningSpec, ScriptedSelection, WallSpec};

use std::fmt;

use crate::error::{HostError, SelectionError};
use crate::math::{Point3, Vector3};
use crate::operations::dimension::{PlacementLine, ReferenceChain};
use crate::shape::{GeometryOptions, Shape};

/// Identifier of an element in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of the view a dimension is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub i64);

/// Identifier of a committed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionId(pub i64);

/// A host-issued handle to one geometric sub-object (face, edge, curve
/// or point).
///
/// The payload is the host's own stable representation; the pipeline only
/// inspects it through [`StableReference`](crate::StableReference).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeometryReference(String);

impl GeometryReference {
    /// Wraps a host stable representation.
    #[must_use]
    pub fn new(stable: impl Into<String>) -> Self {
        Self(stable.into())
    }

    /// Returns the host stable representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeometryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element categories the pipeline filters dependents by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Doors,
    Windows,
}

/// What the host knows about a wall.
#[derive(Debug, Clone)]
pub struct WallInfo {
    /// Endpoints of the wall's location line, when it is a straight line.
    pub baseline: Option<(Point3, Point3)>,
    /// Unit vector pointing to the wall's exterior side.
    pub orientation: Vector3,
}

/// The kind of a resolved element.
#[derive(Debug, Clone)]
pub enum ElementKind {
    Wall(WallInfo),
    FamilyInstance { category: Category },
    Other { category: Category },
}

/// Result of resolving a reference against an element's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedGeometry {
    Edge,
    Face,
    /// A curve, point or other non-topological object.
    Other,
}

/// Read access to the host document plus the single mutating commit.
pub trait HostDocument {
    /// Looks up an element's kind.
    fn element(&self, id: ElementId) -> Option<ElementKind>;

    /// Returns the elements hosted by `host` whose category is in `categories`,
    /// in the host's enumeration order.
    fn dependent_elements(&self, host: ElementId, categories: &[Category]) -> Vec<ElementId>;

    /// Returns the element's geometry tree under the given options.
    fn geometry(&self, id: ElementId, options: &GeometryOptions) -> Option<Shape>;

    /// Serializes a reference to its stable string form.
    fn stable_representation(&self, reference: &GeometryReference) -> Option<String>;

    /// Parses a stable string back into a reference. `None` when the host
    /// rejects the string.
    fn parse_reference(&self, stable: &str) -> Option<GeometryReference>;

    /// Resolves a reference to the geometric object it addresses on
    /// `element`. `None` when nothing matches.
    fn resolve_reference(
        &self,
        element: ElementId,
        reference: &GeometryReference,
    ) -> Option<ResolvedGeometry>;

    /// Creates a linear dimension inside one named transaction.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::CommitFailed`] if the host rejects the dimension;
    /// the document must then be left unchanged.
    fn commit_dimension(
        &mut self,
        transaction: &str,
        view: ViewId,
        line: &PlacementLine,
        chain: &ReferenceChain,
    ) -> Result<DimensionId, HostError>;
}

/// Interactive element picking.
pub trait Selection {
    /// Asks the user to pick one element.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Cancelled`] when the user aborts the pick.
    fn pick_element(&mut self, prompt: &str) -> Result<ElementId, SelectionError>;
}
