use tracing::{debug, info, warn};

use crate::config::DimensionConfig;
use crate::error::{GeometryError, Result, SelectionError};
use crate::host::{DimensionId, ElementId, ElementKind, GeometryReference, HostDocument, Selection, ViewId};
use crate::operations::reference::SpecialReference;
use crate::operations::select::{ExtractSolids, SelectFace, VerticalEdges};
use crate::shape::GeometryOptions;
use crate::topology::{EdgeId, TopologyStore};

use super::{PlacementLine, ReferenceChain, ReferenceChainBuilder};

/// Everything needed to draw a wall dimension, computed without touching
/// the document.
#[derive(Debug, Clone)]
pub struct DimensionPlan {
    pub wall: ElementId,
    pub chain: ReferenceChain,
    pub line: PlacementLine,
    /// Hosted openings left out because their anchor did not resolve.
    pub skipped: Vec<ElementId>,
}

/// Dimensions a picked wall from edge to edge through its openings.
///
/// All geometry work happens in [`Self::plan`]; [`Self::execute`] adds the
/// pick and the single commit. Any error before the commit leaves the
/// document untouched.
#[derive(Debug, Clone, Default)]
pub struct DimensionWall {
    config: DimensionConfig,
}

impl DimensionWall {
    /// Creates the command with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config` does not validate.
    pub fn new(config: DimensionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &DimensionConfig {
        &self.config
    }

    /// Computes the reference chain and placement line for `wall`.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NotAWall`] if `wall` is some other element.
    /// - [`GeometryError::NoMatchingFace`] if no face looks along the wall
    ///   orientation, [`GeometryError::InsufficientVerticalEdges`] if that face
    ///   has fewer than two vertical edges.
    /// - [`ReferenceError::NoSymbolGeometry`](crate::error::ReferenceError::NoSymbolGeometry)
    ///   if a hosted opening has no symbol geometry.
    pub fn plan<D>(&self, doc: &D, wall: ElementId) -> Result<DimensionPlan>
    where
        D: HostDocument + ?Sized,
    {
        let Some(kind) = doc.element(wall) else {
            return Err(SelectionError::ElementNotFound(wall).into());
        };
        let ElementKind::Wall(info) = kind else {
            return Err(SelectionError::NotAWall(wall).into());
        };

        let shape = doc
            .geometry(wall, &GeometryOptions::wall_faces())
            .ok_or(GeometryError::NoGeometry(wall))?;
        let store = shape.store();
        let solids = ExtractSolids::new(&shape).execute()?;

        let orientation = info.orientation;
        let face = SelectFace::new(&solids, orientation)
            .with_tolerance(self.config.tolerance)
            .execute(store)?
            .ok_or(GeometryError::NoMatchingFace {
                x: orientation.x,
                y: orientation.y,
                z: orientation.z,
            })?;
        let edges = VerticalEdges::new(face)
            .with_tolerance(self.config.tolerance)
            .execute(store)?;
        let primary = edge_reference(store, edges.first)?;
        let secondary = edge_reference(store, edges.second)?;

        let mut builder = ReferenceChainBuilder::new(primary, secondary);
        let mut skipped = Vec::new();
        for opening in doc.dependent_elements(wall, &self.config.categories) {
            match SpecialReference::new(opening, self.config.opening_kind).execute(doc)? {
                Some(encoded) => builder = builder.opening(encoded.reference),
                None => {
                    warn!(
                        %opening,
                        kind = %self.config.opening_kind,
                        "opening has no resolvable anchor, leaving it out"
                    );
                    skipped.push(opening);
                }
            }
        }

        let (start, end) = info.baseline.ok_or(GeometryError::MissingLocationLine(wall))?;
        let line = PlacementLine::offset(start, end, &orientation, self.config.offset_distance);
        let chain = builder.build();
        debug!(%wall, references = chain.len(), skipped = skipped.len(), "planned wall dimension");

        Ok(DimensionPlan {
            wall,
            chain,
            line,
            skipped,
        })
    }

    /// Runs the whole command: pick a wall, plan, commit once.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Cancelled`] if the pick is aborted, any
    /// error of [`Self::plan`], or the host's commit failure.
    pub fn execute<D, S>(&self, doc: &mut D, selection: &mut S, view: ViewId) -> Result<DimensionId>
    where
        D: HostDocument + ?Sized,
        S: Selection + ?Sized,
    {
        let wall = selection.pick_element(&self.config.prompt)?;
        let plan = self.plan(&*doc, wall)?;
        let id = doc.commit_dimension(&self.config.transaction_name, view, &plan.line, &plan.chain)?;
        info!(%wall, references = plan.chain.len(), "created wall dimension");
        Ok(id)
    }
}

fn edge_reference(store: &TopologyStore, edge: EdgeId) -> Result<GeometryReference> {
    Ok(store
        .edge(edge)?
        .reference
        .clone()
        .ok_or(GeometryError::MissingReference("wall edge"))?)
}
