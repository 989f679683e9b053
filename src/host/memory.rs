//! An in-memory host document.
//!
//! Walls are straight extrusions with door notches cut from their bottom
//! edge; hosted openings carry a box-shaped symbol and a configurable set
//! of resolvable anchors. Every face and edge gets a host reference in the
//! same layouts a CAD host hands out.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use tracing::debug;

use crate::error::{HostError, OperationError, Result, SelectionError};
use crate::math::{Point3, Vector3, TOLERANCE, UP};
use crate::operations::creation::{MakeBox, MakeFace, MakeSolid, MakeWire};
use crate::operations::dimension::{PlacementLine, ReferenceChain};
use crate::operations::reference::{ReferenceTag, SpecialReferenceKind, StableReference};
use crate::operations::shaping::Extrude;
use crate::shape::{GeometryInstance, GeometryObject, GeometryOptions, Shape};
use crate::topology::{ShellData, SolidId, TopologyStore};

use super::{
    Category, DimensionId, ElementId, ElementKind, GeometryReference, HostDocument,
    ResolvedGeometry, Selection, ViewId, WallInfo,
};

const DEFAULT_WALL_HEIGHT: f64 = 3.0;
const DEFAULT_WALL_THICKNESS: f64 = 0.2;
const DEFAULT_OPENING_HEIGHT: f64 = 2.1;

/// Symbol faces and edges are numbered from these sub-indices so they never
/// collide with the special reference anchors.
const SYMBOL_FACE_BASE: usize = 100;
const SYMBOL_EDGE_BASE: usize = 200;

/// A straight wall to add to a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct WallSpec {
    start: Point3,
    end: Point3,
    height: f64,
    thickness: f64,
    flipped: bool,
    orientation: Option<Vector3>,
    location_line: bool,
}

impl WallSpec {
    /// A wall from `start` to `end`, 3 high and 0.2 thick.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            height: DEFAULT_WALL_HEIGHT,
            thickness: DEFAULT_WALL_THICKNESS,
            flipped: false,
            orientation: None,
            location_line: true,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Puts the exterior on the other side of the baseline.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flipped = !self.flipped;
        self
    }

    /// Reports `orientation` to the pipeline instead of the one derived from
    /// the baseline. The modelled geometry is unaffected.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Vector3) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Reports the wall as having no straight location line.
    #[must_use]
    pub fn without_location_line(mut self) -> Self {
        self.location_line = false;
        self
    }

    fn direction(&self) -> Vector3 {
        (self.end - self.start).normalize()
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn modelled_orientation(&self) -> Vector3 {
        let orientation = UP.cross(&self.direction());
        if self.flipped {
            -orientation
        } else {
            orientation
        }
    }

    fn info(&self) -> WallInfo {
        WallInfo {
            baseline: self.location_line.then_some((self.start, self.end)),
            orientation: self.orientation.unwrap_or_else(|| self.modelled_orientation()),
        }
    }
}

/// A door or window hosted by a wall.
#[derive(Debug, Clone)]
pub struct OpeningSpec {
    category: Category,
    position: f64,
    width: f64,
    height: f64,
    anchors: Vec<(SpecialReferenceKind, ResolvedGeometry)>,
    symbol: bool,
}

impl OpeningSpec {
    /// An opening centred `position` along its wall's baseline.
    ///
    /// The symbol resolves [`SpecialReferenceKind::Left`],
    /// [`SpecialReferenceKind::CenterLR`] and [`SpecialReferenceKind::Right`]
    /// to faces.
    #[must_use]
    pub fn new(category: Category, position: f64, width: f64) -> Self {
        Self {
            category,
            position,
            width,
            height: DEFAULT_OPENING_HEIGHT,
            anchors: vec![
                (SpecialReferenceKind::Left, ResolvedGeometry::Face),
                (SpecialReferenceKind::CenterLR, ResolvedGeometry::Face),
                (SpecialReferenceKind::Right, ResolvedGeometry::Face),
            ],
            symbol: true,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Makes `kind` resolve to `resolved`, replacing any previous entry.
    #[must_use]
    pub fn with_anchor(mut self, kind: SpecialReferenceKind, resolved: ResolvedGeometry) -> Self {
        self.anchors.retain(|(k, _)| *k != kind);
        self.anchors.push((kind, resolved));
        self
    }

    /// Removes every anchor.
    #[must_use]
    pub fn without_anchors(mut self) -> Self {
        self.anchors.clear();
        self
    }

    /// The instance's geometry will contain no symbol.
    #[must_use]
    pub fn without_symbol_geometry(mut self) -> Self {
        self.symbol = false;
        self
    }

    fn span(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.position - half, self.position + half)
    }

    fn notches(&self) -> bool {
        self.category == Category::Doors
    }
}

/// A dimension recorded by [`MemoryDocument::commit_dimension`].
#[derive(Debug, Clone)]
pub struct CommittedDimension {
    pub id: DimensionId,
    pub transaction: String,
    pub view: ViewId,
    pub line: PlacementLine,
    pub chain: ReferenceChain,
}

#[derive(Debug, Clone)]
enum Model {
    Wall(WallSpec),
    Opening { host: ElementId, spec: OpeningSpec },
    Plain,
}

#[derive(Debug, Clone)]
struct Element {
    unique_id: String,
    kind: ElementKind,
    model: Model,
    geometry: Option<Shape>,
}

/// A [`HostDocument`] backed by plain collections.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: BTreeMap<ElementId, Element>,
    by_unique_id: HashMap<String, ElementId>,
    /// Every face and edge reference, by stable string.
    references: HashMap<String, (ElementId, ResolvedGeometry)>,
    /// Untagged special reference anchors of hosted openings.
    anchors: HashMap<(ElementId, String), ResolvedGeometry>,
    requests: RefCell<Vec<(ElementId, GeometryOptions)>>,
    commits: Vec<CommittedDimension>,
    fail_commits: bool,
    next_id: i64,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a straight wall.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the wall is degenerate or
    /// not horizontal.
    pub fn add_wall(&mut self, spec: WallSpec) -> Result<ElementId> {
        if spec.length() < TOLERANCE || (spec.end.z - spec.start.z).abs() > TOLERANCE {
            return Err(OperationError::InvalidInput(
                "wall baseline must be a horizontal segment".into(),
            )
            .into());
        }
        if spec.height < TOLERANCE || spec.thickness < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "wall height and thickness must be positive, got {} and {}",
                spec.height, spec.thickness
            ))
            .into());
        }

        let id = self.insert(ElementKind::Wall(spec.info()), Model::Wall(spec), None);
        if let Err(err) = self.rebuild_wall(id) {
            self.discard(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Adds a door or window to `wall`. Doors are cut into the wall's
    /// geometry.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `wall` is not a wall of
    /// this document, the opening leaves the wall, or it overlaps or touches
    /// another opening. A failed add leaves the document unchanged.
    pub fn add_opening(&mut self, wall: ElementId, spec: OpeningSpec) -> Result<ElementId> {
        let Some(Element {
            model: Model::Wall(wall_spec),
            ..
        }) = self.elements.get(&wall)
        else {
            return Err(OperationError::InvalidInput(format!("{wall} is not a wall")).into());
        };
        let wall_spec = wall_spec.clone();

        let (lo, hi) = spec.span();
        if spec.width < TOLERANCE || lo < TOLERANCE || hi > wall_spec.length() - TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "opening [{lo}, {hi}] does not fit wall {wall}"
            ))
            .into());
        }
        if spec.height < TOLERANCE || spec.height > wall_spec.height - TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "opening height {} does not fit wall {wall}",
                spec.height
            ))
            .into());
        }
        if self
            .openings_of(wall)
            .any(|(_, other)| overlaps(other.span(), (lo, hi)))
        {
            return Err(OperationError::InvalidInput(format!(
                "opening [{lo}, {hi}] overlaps another opening of {wall}"
            ))
            .into());
        }

        let kind = ElementKind::FamilyInstance {
            category: spec.category,
        };
        let notches = spec.notches();
        let id = self.insert(kind, Model::Opening { host: wall, spec: spec.clone() }, None);
        let built = self
            .opening_geometry(id, &spec, wall_spec.thickness)
            .and_then(|geometry| {
                if let Some(element) = self.elements.get_mut(&id) {
                    element.geometry = Some(geometry);
                }
                if notches {
                    self.rebuild_wall(wall)?;
                }
                Ok(())
            });
        if let Err(err) = built {
            self.discard(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Adds an arbitrary element with optional geometry.
    pub fn add_element(&mut self, kind: ElementKind, geometry: Option<Shape>) -> ElementId {
        self.insert(kind, Model::Plain, geometry)
    }

    /// Returns the element's unique id, the first token of its references.
    #[must_use]
    pub fn unique_id(&self, id: ElementId) -> Option<String> {
        self.elements.get(&id).map(|e| e.unique_id.clone())
    }

    /// Every geometry query answered so far, oldest first.
    #[must_use]
    pub fn geometry_requests(&self) -> Vec<(ElementId, GeometryOptions)> {
        self.requests.borrow().clone()
    }

    /// Every committed dimension, oldest first.
    #[must_use]
    pub fn commits(&self) -> &[CommittedDimension] {
        &self.commits
    }

    /// Makes subsequent commits fail.
    pub fn set_commit_failure(&mut self, fail: bool) {
        self.fail_commits = fail;
    }

    fn insert(&mut self, kind: ElementKind, model: Model, geometry: Option<Shape>) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        let unique_id = format!("e{:06x}-{:04}", self.next_id * 7919, self.next_id);
        self.by_unique_id.insert(unique_id.clone(), id);
        self.elements.insert(
            id,
            Element {
                unique_id,
                kind,
                model,
                geometry,
            },
        );
        id
    }

    /// Forgets `id` along with every reference and anchor it owns.
    fn discard(&mut self, id: ElementId) {
        if let Some(element) = self.elements.remove(&id) {
            self.by_unique_id.remove(&element.unique_id);
        }
        self.references.retain(|_, (owner, _)| *owner != id);
        self.anchors.retain(|(owner, _), _| *owner != id);
    }

    fn openings_of(&self, wall: ElementId) -> impl Iterator<Item = (ElementId, &OpeningSpec)> {
        self.elements.iter().filter_map(move |(id, e)| match &e.model {
            Model::Opening { host, spec } if *host == wall => Some((*id, spec)),
            _ => None,
        })
    }

    fn rebuild_wall(&mut self, wall: ElementId) -> Result<()> {
        let Some(Element {
            model: Model::Wall(spec),
            unique_id,
            ..
        }) = self.elements.get(&wall)
        else {
            return Err(OperationError::InvalidInput(format!("{wall} is not a wall")).into());
        };
        let spec = spec.clone();
        let unique_id = unique_id.clone();

        let mut doors: Vec<(f64, f64, f64)> = self
            .openings_of(wall)
            .filter(|(_, o)| o.notches())
            .map(|(_, o)| {
                let (lo, hi) = o.span();
                (lo, hi, o.height)
            })
            .collect();
        doors.sort_by(|a, b| a.0.total_cmp(&b.0));

        let dir = spec.direction();
        let orientation = spec.modelled_orientation();
        let shift = -orientation * (spec.thickness / 2.0);
        let at = |along: f64, up: f64| spec.start + dir * along + UP * up + shift;

        let mut profile = vec![at(0.0, 0.0)];
        for (lo, hi, height) in doors {
            profile.extend([at(lo, 0.0), at(lo, height), at(hi, height), at(hi, 0.0)]);
        }
        profile.extend([
            at(spec.length(), 0.0),
            at(spec.length(), spec.height),
            at(0.0, spec.height),
        ]);

        let mut store = TopologyStore::new();
        // Hosts list an empty solid ahead of the wall body.
        let placeholder = store.add_shell(ShellData {
            faces: vec![],
            is_closed: false,
        });
        let placeholder = MakeSolid::new(placeholder).execute(&mut store)?;
        let wire = MakeWire::new(profile, true).execute(&mut store)?;
        let face = MakeFace::new(wire, vec![]).execute(&mut store)?;
        let body = Extrude::new(face, orientation * spec.thickness).execute(&mut store)?;

        let tagged = assign_references(
            &mut store,
            body,
            |n| format!("{unique_id}:{n}:SURFACE"),
            |n| format!("{unique_id}:{n}:LINEAR"),
        )?;
        self.references.retain(|_, (owner, _)| *owner != wall);
        self.references
            .extend(tagged.into_iter().map(|(r, g)| (r, (wall, g))));

        let shape = Shape::new(
            store,
            vec![GeometryObject::Solid(placeholder), GeometryObject::Solid(body)],
        );
        if let Some(element) = self.elements.get_mut(&wall) {
            element.geometry = Some(shape);
        }
        debug!(%wall, "rebuilt wall geometry");
        Ok(())
    }

    fn opening_geometry(
        &mut self,
        id: ElementId,
        spec: &OpeningSpec,
        thickness: f64,
    ) -> Result<Shape> {
        let instance = self
            .unique_id(id)
            .ok_or(HostError::UnknownElement(id))?;
        let symbol_id = format!("{instance}-type");
        let prefix = format!("{instance}:0:INSTANCE:{symbol_id}");

        for (kind, resolved) in &spec.anchors {
            self.anchors
                .insert((id, format!("{prefix}:{}", kind.index())), *resolved);
        }

        if !spec.symbol {
            return Ok(Shape::new(
                TopologyStore::new(),
                vec![GeometryObject::Instance(GeometryInstance::without_symbol())],
            ));
        }

        let mut store = TopologyStore::new();
        let half = spec.width / 2.0;
        let body = MakeBox::new(
            Point3::new(-half, -thickness / 2.0, 0.0),
            Point3::new(half, thickness / 2.0, spec.height),
        )
        .execute(&mut store)?;
        let tagged = assign_references(
            &mut store,
            body,
            |n| format!("{prefix}:{}:SURFACE", SYMBOL_FACE_BASE + n),
            |n| format!("{prefix}:{}:LINEAR", SYMBOL_EDGE_BASE + n),
        )?;
        self.references
            .extend(tagged.into_iter().map(|(r, g)| (r, (id, g))));

        let symbol = Shape::new(store, vec![GeometryObject::Solid(body)]);
        Ok(Shape::new(
            TopologyStore::new(),
            vec![GeometryObject::Instance(GeometryInstance::new(symbol))],
        ))
    }

    fn is_known(&self, reference: &GeometryReference) -> bool {
        if self.references.contains_key(reference.as_str()) {
            return true;
        }
        StableReference::parse(reference.as_str())
            .ok()
            .and_then(|stable| self.by_unique_id.get(stable.context()))
            .is_some_and(|&owner| self.resolve_reference(owner, reference).is_some())
    }
}

impl HostDocument for MemoryDocument {
    fn element(&self, id: ElementId) -> Option<ElementKind> {
        self.elements.get(&id).map(|e| e.kind.clone())
    }

    fn dependent_elements(&self, host: ElementId, categories: &[Category]) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter_map(|(id, e)| match &e.model {
                Model::Opening { host: h, spec }
                    if *h == host && categories.contains(&spec.category) =>
                {
                    Some(*id)
                }
                _ => None,
            })
            .collect()
    }

    fn geometry(&self, id: ElementId, options: &GeometryOptions) -> Option<Shape> {
        self.requests.borrow_mut().push((id, *options));
        self.elements.get(&id)?.geometry.clone()
    }

    fn stable_representation(&self, reference: &GeometryReference) -> Option<String> {
        let context = reference.as_str().split(':').next()?;
        self.by_unique_id
            .contains_key(context)
            .then(|| reference.as_str().to_owned())
    }

    fn parse_reference(&self, stable: &str) -> Option<GeometryReference> {
        let context = stable.split(':').next()?;
        self.by_unique_id
            .contains_key(context)
            .then(|| GeometryReference::new(stable))
    }

    fn resolve_reference(
        &self,
        element: ElementId,
        reference: &GeometryReference,
    ) -> Option<ResolvedGeometry> {
        if let Some(&(owner, resolved)) = self.references.get(reference.as_str()) {
            return (owner == element).then_some(resolved);
        }

        let stable = StableReference::parse(reference.as_str()).ok()?;
        let resolved = *self
            .anchors
            .get(&(element, stable.untagged().to_string()))?;
        match (stable.tag(), resolved) {
            (None, _)
            | (Some(ReferenceTag::Linear), ResolvedGeometry::Edge)
            | (Some(ReferenceTag::Surface), ResolvedGeometry::Face) => Some(resolved),
            _ => None,
        }
    }

    fn commit_dimension(
        &mut self,
        transaction: &str,
        view: ViewId,
        line: &PlacementLine,
        chain: &ReferenceChain,
    ) -> std::result::Result<DimensionId, HostError> {
        if self.fail_commits {
            return Err(HostError::CommitFailed(format!(
                "transaction {transaction:?} was rolled back"
            )));
        }
        if let Some(unknown) = chain.references().iter().find(|r| !self.is_known(r)) {
            return Err(HostError::CommitFailed(format!(
                "reference {unknown} does not resolve"
            )));
        }

        let id = DimensionId(i64::try_from(self.commits.len()).unwrap_or(i64::MAX) + 1);
        self.commits.push(CommittedDimension {
            id,
            transaction: transaction.to_owned(),
            view,
            line: *line,
            chain: chain.clone(),
        });
        Ok(id)
    }
}

/// Element picks answered from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedSelection {
    picks: VecDeque<ElementId>,
    prompts: Vec<String>,
}

impl ScriptedSelection {
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// A selection where the user aborts the first pick.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Selection for ScriptedSelection {
    fn pick_element(&mut self, prompt: &str) -> std::result::Result<ElementId, SelectionError> {
        self.prompts.push(prompt.to_owned());
        self.picks.pop_front().ok_or(SelectionError::Cancelled)
    }
}

/// Touching spans count as overlapping: they would share a profile vertex.
fn overlaps(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.1 + TOLERANCE && b.0 < a.1 + TOLERANCE
}

/// Gives every face and edge of `solid` a reference, numbered in store order.
fn assign_references(
    store: &mut TopologyStore,
    solid: SolidId,
    face_reference: impl Fn(usize) -> String,
    edge_reference: impl Fn(usize) -> String,
) -> Result<Vec<(String, ResolvedGeometry)>> {
    let mut tagged = Vec::new();
    let mut edges = Vec::new();
    for (n, face) in store.solid_faces(solid)?.into_iter().enumerate() {
        let reference = face_reference(n);
        let data = store.face_mut(face)?;
        data.reference = Some(GeometryReference::new(reference.clone()));
        tagged.push((reference, ResolvedGeometry::Face));

        let wires: Vec<_> = std::iter::once(data.outer_wire)
            .chain(data.inner_wires.iter().copied())
            .collect();
        for wire in wires {
            for oe in &store.wire(wire)?.edges {
                if !edges.contains(&oe.edge) {
                    edges.push(oe.edge);
                }
            }
        }
    }
    for (m, edge) in edges.into_iter().enumerate() {
        let reference = edge_reference(m);
        store.edge_mut(edge)?.reference = Some(GeometryReference::new(reference.clone()));
        tagged.push((reference, ResolvedGeometry::Edge));
    }
    Ok(tagged)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::select::{ExtractSolids, SelectFace};

    fn wall_10(doc: &mut MemoryDocument) -> ElementId {
        doc.add_wall(WallSpec::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0)))
            .unwrap()
    }

    #[test]
    fn wall_orientation_is_left_of_baseline() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        let Some(ElementKind::Wall(info)) = doc.element(wall) else {
            panic!("expected a wall");
        };
        approx::assert_relative_eq!(info.orientation, Vector3::y());
        assert_eq!(info.baseline, Some((Point3::origin(), Point3::new(10.0, 0.0, 0.0))));
    }

    #[test]
    fn wall_geometry_has_placeholder_then_body() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        let shape = doc.geometry(wall, &GeometryOptions::wall_faces()).unwrap();
        assert_eq!(shape.objects().len(), 2);

        let solids = ExtractSolids::new(&shape).execute().unwrap();
        assert_eq!(solids.len(), 1);
        approx::assert_relative_eq!(
            shape.store().solid(solids[0]).unwrap().volume,
            6.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn door_is_cut_into_exterior_face() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        doc.add_opening(wall, OpeningSpec::new(Category::Doors, 4.0, 1.0))
            .unwrap();

        let shape = doc.geometry(wall, &GeometryOptions::wall_faces()).unwrap();
        let solids = ExtractSolids::new(&shape).execute().unwrap();
        let face = SelectFace::new(&solids, Vector3::y())
            .execute(shape.store())
            .unwrap()
            .unwrap();
        let outer = shape.store().face(face).unwrap().outer_wire;
        assert_eq!(shape.store().wire(outer).unwrap().edges.len(), 8);
    }

    #[test]
    fn window_leaves_wall_uncut() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        doc.add_opening(wall, OpeningSpec::new(Category::Windows, 4.0, 1.0))
            .unwrap();

        let shape = doc.geometry(wall, &GeometryOptions::wall_faces()).unwrap();
        let solids = ExtractSolids::new(&shape).execute().unwrap();
        assert_eq!(shape.store().solid_faces(solids[0]).unwrap().len(), 6);
    }

    #[test]
    fn openings_must_fit_and_not_overlap() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        assert!(doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 0.2, 1.0))
            .is_err());
        assert!(doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 5.0, 1.0).with_height(3.5))
            .is_err());
        doc.add_opening(wall, OpeningSpec::new(Category::Doors, 5.0, 1.0))
            .unwrap();
        assert!(doc
            .add_opening(wall, OpeningSpec::new(Category::Windows, 5.5, 1.0))
            .is_err());
    }

    #[test]
    fn touching_door_is_rejected_without_trace() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        doc.add_opening(wall, OpeningSpec::new(Category::Doors, 3.0, 1.0))
            .unwrap();
        let before = doc.elements.len();

        assert!(doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 4.0, 1.0))
            .is_err());
        assert_eq!(doc.elements.len(), before);
        assert_eq!(doc.by_unique_id.len(), before);
        assert_eq!(doc.dependent_elements(wall, &[Category::Doors]).len(), 1);

        let later = doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 6.0, 1.0))
            .unwrap();
        assert_eq!(doc.dependent_elements(wall, &[Category::Doors]).len(), 2);
        let plan = crate::DimensionWall::default().plan(&doc, wall).unwrap();
        assert_eq!(plan.chain.len(), 4);
        assert!(plan.chain.openings()[1]
            .as_str()
            .starts_with(&doc.unique_id(later).unwrap()));
    }

    #[test]
    fn discarded_opening_leaves_no_references() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        let door = doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 3.0, 1.0))
            .unwrap();
        let wall_refs = doc.references.values().filter(|(o, _)| *o == wall).count();

        doc.discard(door);
        assert!(doc.references.values().all(|(owner, _)| *owner != door));
        assert!(doc.anchors.keys().all(|(owner, _)| *owner != door));
        assert_eq!(
            doc.references.values().filter(|(o, _)| *o == wall).count(),
            wall_refs
        );
        assert!(doc.element(door).is_none());
    }

    #[test]
    fn anchors_resolve_only_with_matching_tag() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        let door = doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 4.0, 0.9))
            .unwrap();
        let uid = doc.unique_id(door).unwrap();
        let base = format!("{uid}:0:INSTANCE:{uid}-type:1");

        let untagged = doc.parse_reference(&base).unwrap();
        assert_eq!(doc.resolve_reference(door, &untagged), Some(ResolvedGeometry::Face));
        let surface = doc.parse_reference(&format!("{base}:SURFACE")).unwrap();
        assert_eq!(doc.resolve_reference(door, &surface), Some(ResolvedGeometry::Face));
        let linear = doc.parse_reference(&format!("{base}:LINEAR")).unwrap();
        assert_eq!(doc.resolve_reference(door, &linear), None);
        assert_eq!(doc.resolve_reference(wall, &untagged), None);
    }

    #[test]
    fn foreign_strings_are_rejected() {
        let doc = MemoryDocument::new();
        assert!(doc.parse_reference("nobody:0:INSTANCE:x:1").is_none());
        assert!(doc
            .stable_representation(&GeometryReference::new("nobody:3:LINEAR"))
            .is_none());
    }

    #[test]
    fn dependents_are_filtered_and_ordered() {
        let mut doc = MemoryDocument::new();
        let wall = wall_10(&mut doc);
        let other = wall_10(&mut doc);
        let window = doc
            .add_opening(wall, OpeningSpec::new(Category::Windows, 8.0, 1.0))
            .unwrap();
        let door = doc
            .add_opening(wall, OpeningSpec::new(Category::Doors, 2.0, 1.0))
            .unwrap();
        doc.add_opening(other, OpeningSpec::new(Category::Doors, 2.0, 1.0))
            .unwrap();

        assert_eq!(
            doc.dependent_elements(wall, &[Category::Doors, Category::Windows]),
            vec![window, door]
        );
        assert_eq!(doc.dependent_elements(wall, &[Category::Doors]), vec![door]);
    }

    #[test]
    fn scripted_selection_runs_dry() {
        let mut selection = ScriptedSelection::new([ElementId(3)]);
        assert_eq!(selection.pick_element("first").unwrap(), ElementId(3));
        assert!(matches!(
            selection.pick_element("second"),
            Err(SelectionError::Cancelled)
        ));
        assert_eq!(selection.prompts(), ["first", "second"]);
    }
}
