use crate::host::GeometryReference;
use crate::math::{Point3, Vector3};

/// The references a linear dimension measures between, in witness order.
///
/// Always shaped `[edge, opening*, edge]`: exactly two wall-edge references
/// bracket the opening references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceChain {
    references: Vec<GeometryReference>,
}

impl ReferenceChain {
    /// All references, first wall edge first.
    #[must_use]
    pub fn references(&self) -> &[GeometryReference] {
        &self.references
    }

    /// Number of references, at least two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Never true for a built chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// The opening references between the two wall edges.
    #[must_use]
    pub fn openings(&self) -> &[GeometryReference] {
        &self.references[1..self.references.len() - 1]
    }
}

/// Assembles a [`ReferenceChain`].
///
/// Openings keep the order in which they are added; nothing is sorted or
/// deduplicated.
#[derive(Debug)]
pub struct ReferenceChainBuilder {
    primary: GeometryReference,
    openings: Vec<GeometryReference>,
    secondary: GeometryReference,
}

impl ReferenceChainBuilder {
    /// Starts a chain between two wall-edge references.
    #[must_use]
    pub fn new(primary: GeometryReference, secondary: GeometryReference) -> Self {
        Self {
            primary,
            openings: Vec::new(),
            secondary,
        }
    }

    /// Appends one opening reference.
    #[must_use]
    pub fn opening(mut self, reference: GeometryReference) -> Self {
        self.openings.push(reference);
        self
    }

    /// Appends opening references in iteration order.
    #[must_use]
    pub fn openings(mut self, references: impl IntoIterator<Item = GeometryReference>) -> Self {
        self.openings.extend(references);
        self
    }

    /// Builds the chain `[primary, openings.., secondary]`.
    #[must_use]
    pub fn build(self) -> ReferenceChain {
        let mut references = Vec::with_capacity(self.openings.len() + 2);
        references.push(self.primary);
        references.extend(self.openings);
        references.push(self.secondary);
        ReferenceChain { references }
    }
}

/// The line a dimension is drawn along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementLine {
    start: Point3,
    end: Point3,
}

impl PlacementLine {
    /// Creates a placement line between two points.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Shifts a wall baseline by `distance` along `orientation`.
    #[must_use]
    pub fn offset(start: Point3, end: Point3, orientation: &Vector3, distance: f64) -> Self {
        let shift = orientation * distance;
        Self::new(start + shift, end + shift)
    }

    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
