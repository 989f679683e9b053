use tracing::{debug, warn};

use crate::error::{ReferenceError, Result};
use crate::host::{ElementId, GeometryReference, HostDocument, ResolvedGeometry};
use crate::shape::{GeometryObject, GeometryOptions, Shape};

use super::{ReferenceTag, SpecialReferenceKind, StableReference};

/// A special reference that resolved on its instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedReference {
    /// The final, tagged stable form.
    pub stable: StableReference,
    /// The host handle parsed from [`Self::stable`].
    pub reference: GeometryReference,
    /// What the untagged reference resolved to.
    pub resolved: ResolvedGeometry,
}

/// Replaces the sub-index of a sampled stable string with `kind`'s index.
///
/// Only the four prefix tokens of `sample` survive.
///
/// # Errors
///
/// Returns a [`ReferenceError`] if `sample` does not parse.
pub fn rewrite_index(
    sample: &str,
    kind: SpecialReferenceKind,
) -> std::result::Result<StableReference, ReferenceError> {
    Ok(StableReference::parse(sample)?.with_index(kind.index()))
}

/// Derives the stable reference to one logical anchor of a family instance.
///
/// The host offers no direct way to address "the left-right centre of this
/// door". Every reference inside a symbol shares the same four-token prefix
/// though, and the anchors sit at fixed sub-indices. So one real reference
/// is sampled from the symbol geometry, its sub-index is swapped for the
/// anchor's, and the result is checked against the host before use.
///
/// Sampling takes the first top-level object of the symbol geometry, in
/// the host's enumeration order, that is a solid whose first face carries a
/// reference, a curve with a reference, or a point with a reference. A host
/// that enumerates differently may sample a different object; any object
/// works as long as it belongs to the symbol.
pub struct SpecialReference {
    instance: ElementId,
    kind: SpecialReferenceKind,
}

impl SpecialReference {
    /// Creates a new `SpecialReference` encoder.
    #[must_use]
    pub fn new(instance: ElementId, kind: SpecialReferenceKind) -> Self {
        Self { instance, kind }
    }

    /// Executes the encoding.
    ///
    /// Returns `Ok(None)` when the anchor does not exist on this family, when
    /// the sampled reference does not follow the token layout, or when the
    /// host rejects the rewritten string. These are per-instance outcomes,
    /// not failures.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NoSymbolGeometry`] if the instance has no
    /// symbol geometry at all.
    pub fn execute<D>(&self, doc: &D) -> Result<Option<EncodedReference>>
    where
        D: HostDocument + ?Sized,
    {
        let symbol = self.symbol_geometry(doc)?;

        let Some(sample) = sample_reference(&symbol)? else {
            debug!(instance = %self.instance, "symbol geometry has no referenced object");
            return Ok(None);
        };
        let Some(sample) = doc.stable_representation(&sample) else {
            warn!(instance = %self.instance, "host could not serialize sampled reference");
            return Ok(None);
        };

        let candidate = match rewrite_index(&sample, self.kind) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(instance = %self.instance, %err, "sampled reference has unexpected layout");
                return Ok(None);
            }
        };

        let resolved = doc
            .parse_reference(&candidate.to_string())
            .and_then(|reference| doc.resolve_reference(self.instance, &reference));
        let (tag, resolved) = match resolved {
            Some(edge @ ResolvedGeometry::Edge) => (ReferenceTag::Linear, edge),
            Some(face @ ResolvedGeometry::Face) => (ReferenceTag::Surface, face),
            Some(ResolvedGeometry::Other) | None => {
                debug!(
                    instance = %self.instance,
                    kind = %self.kind,
                    reference = %candidate,
                    "special reference does not resolve to an edge or face"
                );
                return Ok(None);
            }
        };

        let stable = candidate.with_tag(tag);
        let Some(reference) = doc.parse_reference(&stable.to_string()) else {
            warn!(reference = %stable, "host rejected tagged reference");
            return Ok(None);
        };
        debug!(instance = %self.instance, reference = %stable, "encoded special reference");

        Ok(Some(EncodedReference {
            stable,
            reference,
            resolved,
        }))
    }

    fn symbol_geometry<D>(&self, doc: &D) -> Result<Shape>
    where
        D: HostDocument + ?Sized,
    {
        let missing = || ReferenceError::NoSymbolGeometry(self.instance);
        let geometry = doc
            .geometry(self.instance, &GeometryOptions::symbol_references())
            .ok_or_else(missing)?;
        let Some(GeometryObject::Instance(instance)) = geometry.objects().first() else {
            return Err(missing().into());
        };
        Ok(instance.symbol_geometry().ok_or_else(missing)?.clone())
    }
}

/// Picks the first referenced object of a symbol, see [`SpecialReference`].
fn sample_reference(symbol: &Shape) -> Result<Option<GeometryReference>> {
    let store = symbol.store();
    for object in symbol.objects() {
        let reference = match object {
            GeometryObject::Solid(solid) => match store.solid_faces(*solid)?.first() {
                Some(&face) => store.face(face)?.reference.clone(),
                None => None,
            },
            GeometryObject::Curve(curve) => curve.reference.clone(),
            GeometryObject::Point(point) => point.reference.clone(),
            GeometryObject::Instance(_) => None,
        };
        if reference.is_some() {
            return Ok(reference);
        }
    }
    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WallDimError;
    use crate::host::{Category, MemoryDocument, OpeningSpec, WallSpec};
    use crate::math::Point3;

    fn document_with_wall() -> (MemoryDocument, ElementId) {
        let mut doc = MemoryDocument::new();
        let wall = doc
            .add_wall(WallSpec::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)))
            .unwrap();
        (doc, wall)
    }

    #[test]
    fn sample_index_is_replaced_by_kind() {
        let rewritten = rewrite_index(
            "inst:0:INSTANCE:sym:17:SURFACE",
            SpecialReferenceKind::CenterLR,
        )
        .unwrap();
        assert_eq!(rewritten.index(), Some(1));
        assert_eq!(rewritten.to_string(), "inst:0:INSTANCE:sym:1");

        for kind in SpecialReferenceKind::ALL {
            let r = rewrite_index("inst:0:INSTANCE:sym:3", kind).unwrap();
            assert!(r.to_string().ends_with(&format!(":{}", kind.index())));
        }
    }

    #[test]
    fn malformed_sample_is_an_error() {
        assert!(rewrite_index("inst:0:INSTANCE", SpecialReferenceKind::Left).is_err());
        assert!(rewrite_index("inst:0:INSTANCE:sym:x", SpecialReferenceKind::Left).is_err());
    }

    #[test]
    fn face_anchor_gets_surface_tag() {
        let (mut doc, wall) = document_with_wall();
        let door = doc
            .add_opening(
                wall,
                OpeningSpec::new(Category::Doors, 4.0, 0.9)
                    .with_anchor(SpecialReferenceKind::CenterLR, ResolvedGeometry::Face),
            )
            .unwrap();

        let encoded = SpecialReference::new(door, SpecialReferenceKind::CenterLR)
            .execute(&doc)
            .unwrap()
            .unwrap();
        assert_eq!(encoded.stable.index(), Some(1));
        assert_eq!(encoded.stable.tag(), Some(&ReferenceTag::Surface));
        assert_eq!(encoded.resolved, ResolvedGeometry::Face);
        assert_eq!(encoded.reference.as_str(), encoded.stable.to_string());
    }

    #[test]
    fn edge_anchor_gets_linear_tag() {
        let (mut doc, wall) = document_with_wall();
        let window = doc
            .add_opening(
                wall,
                OpeningSpec::new(Category::Windows, 7.0, 1.2)
                    .with_anchor(SpecialReferenceKind::Left, ResolvedGeometry::Edge),
            )
            .unwrap();

        let encoded = SpecialReference::new(window, SpecialReferenceKind::Left)
            .execute(&doc)
            .unwrap()
            .unwrap();
        assert!(encoded.stable.to_string().ends_with(":0:LINEAR"));
    }

    #[test]
    fn unresolvable_anchor_is_absent() {
        let (mut doc, wall) = document_with_wall();
        let door = doc
            .add_opening(
                wall,
                OpeningSpec::new(Category::Doors, 4.0, 0.9)
                    .with_anchor(SpecialReferenceKind::Left, ResolvedGeometry::Face),
            )
            .unwrap();

        let result = SpecialReference::new(door, SpecialReferenceKind::Top)
            .execute(&doc)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn non_topological_anchor_is_absent() {
        let (mut doc, wall) = document_with_wall();
        let door = doc
            .add_opening(
                wall,
                OpeningSpec::new(Category::Doors, 4.0, 0.9)
                    .with_anchor(SpecialReferenceKind::CenterLR, ResolvedGeometry::Other),
            )
            .unwrap();

        let result = SpecialReference::new(door, SpecialReferenceKind::CenterLR)
            .execute(&doc)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_sample_makes_anchor_absent() {
        use crate::host::ElementKind;
        use crate::shape::{GeometryInstance, PointObject};
        use crate::topology::TopologyStore;

        let (mut doc, wall) = document_with_wall();
        let context = doc.unique_id(wall).unwrap();
        for sampled in [format!("{context}:7"), format!("{context}:0:INSTANCE:sym:x")] {
            let symbol = Shape::new(
                TopologyStore::new(),
                vec![GeometryObject::Point(PointObject {
                    position: Point3::origin(),
                    reference: Some(GeometryReference::new(sampled)),
                })],
            );
            let instance = doc.add_element(
                ElementKind::FamilyInstance {
                    category: Category::Doors,
                },
                Some(Shape::new(
                    TopologyStore::new(),
                    vec![GeometryObject::Instance(GeometryInstance::new(symbol))],
                )),
            );

            let result = SpecialReference::new(instance, SpecialReferenceKind::CenterLR)
                .execute(&doc)
                .unwrap();
            assert!(result.is_none());
        }
    }

    #[test]
    fn missing_symbol_geometry_is_fatal() {
        let (mut doc, wall) = document_with_wall();
        let door = doc
            .add_opening(
                wall,
                OpeningSpec::new(Category::Doors, 4.0, 0.9).without_symbol_geometry(),
            )
            .unwrap();

        let err = SpecialReference::new(door, SpecialReferenceKind::CenterLR)
            .execute(&doc)
            .unwrap_err();
        assert!(matches!(
            err,
            WallDimError::Reference(ReferenceError::NoSymbolGeometry(id)) if id == door
        ));
    }

    #[test]
    fn symbol_geometry_is_requested_with_hidden_objects() {
        let (mut doc, wall) = document_with_wall();
        let door = doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 4.0, 0.9))
            .unwrap();

        SpecialReference::new(door, SpecialReferenceKind::CenterLR)
            .execute(&doc)
            .unwrap();
        let requests = doc.geometry_requests();
        let (id, options) = requests.last().unwrap();
        assert_eq!(*id, door);
        assert!(options.include_non_visible);
        assert!(options.compute_references);
    }

    #[test]
    fn curve_is_sampled_when_no_solid_precedes_it() {
        use crate::shape::{CurveObject, GeometryInstance, PointObject};
        use crate::operations::creation::MakeWire;
        use crate::topology::TopologyStore;

        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![Point3::origin(), Point3::new(0.0, 0.0, 1.0)], false)
            .execute(&mut store)
            .unwrap();
        let edge = store.wire(wire).unwrap().edges[0].edge;
        let symbol = Shape::new(
            store,
            vec![
                GeometryObject::Point(PointObject {
                    position: Point3::origin(),
                    reference: None,
                }),
                GeometryObject::Curve(CurveObject {
                    edge,
                    reference: Some(GeometryReference::new("i:0:INSTANCE:s:9:LINEAR")),
                }),
                GeometryObject::Point(PointObject {
                    position: Point3::origin(),
                    reference: Some(GeometryReference::new("i:0:INSTANCE:s:2")),
                }),
            ],
        );

        let sampled = sample_reference(&symbol).unwrap().unwrap();
        assert_eq!(sampled.as_str(), "i:0:INSTANCE:s:9:LINEAR");

        let nested = Shape::new(
            TopologyStore::new(),
            vec![GeometryObject::Instance(GeometryInstance::new(symbol))],
        );
        assert!(sample_reference(&nested).unwrap().is_none());
    }
}
