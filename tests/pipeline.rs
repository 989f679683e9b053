#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use tracing_subscriber::EnvFilter;

use walldim::error::{GeometryError, HostError, ReferenceError, SelectionError};
use walldim::host::{
    Category, ElementKind, HostDocument, MemoryDocument, OpeningSpec, ScriptedSelection, ViewId,
    WallSpec,
};
use walldim::math::Point3;
use walldim::{DimensionConfig, DimensionWall, StableReference, WallDimError};

const VIEW: ViewId = ViewId(1);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn wall_with_two_doors() -> (MemoryDocument, walldim::host::ElementId) {
    let mut doc = MemoryDocument::new();
    let wall = doc
        .add_wall(WallSpec::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)))
        .unwrap();
    doc.add_opening(wall, OpeningSpec::new(Category::Doors, 2.5, 0.9))
        .unwrap();
    doc.add_opening(wall, OpeningSpec::new(Category::Doors, 7.0, 1.0))
        .unwrap();
    (doc, wall)
}

#[test]
fn wall_with_two_doors_gets_one_four_reference_dimension() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    let mut selection = ScriptedSelection::new([wall]);

    let command = DimensionWall::default();
    let id = command.execute(&mut doc, &mut selection, VIEW).unwrap();

    assert_eq!(doc.commits().len(), 1);
    let commit = &doc.commits()[0];
    assert_eq!(commit.id, id);
    assert_eq!(commit.transaction, "Create Dimensions");
    assert_eq!(commit.view, VIEW);
    assert_eq!(selection.prompts(), ["Select a wall to dimension"]);

    let refs = commit.chain.references();
    assert_eq!(refs.len(), 4);
    let wall_uid = doc.unique_id(wall).unwrap();
    assert!(refs[0].as_str().starts_with(&wall_uid));
    assert!(refs[3].as_str().starts_with(&wall_uid));
    for door in commit.chain.openings() {
        let stable = StableReference::parse(door.as_str()).unwrap();
        assert_eq!(stable.index(), Some(1));
        assert!(door.as_str().ends_with(":SURFACE"));
    }

    assert_relative_eq!(*commit.line.start(), Point3::new(0.0, 5.0, 0.0));
    assert_relative_eq!(*commit.line.end(), Point3::new(10.0, 5.0, 0.0));
}

#[test]
fn custom_offset_moves_the_line() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    let command = DimensionWall::new(DimensionConfig::default().with_offset(-2.0)).unwrap();

    command
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap();
    assert_relative_eq!(*doc.commits()[0].line.start(), Point3::new(0.0, -2.0, 0.0));
}

#[test]
fn picking_a_door_creates_nothing() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    let door = doc.dependent_elements(wall, &[Category::Doors])[0];

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([door]), VIEW)
        .unwrap_err();
    assert!(matches!(err, WallDimError::Selection(SelectionError::NotAWall(_))));
    assert!(doc.commits().is_empty());
}

#[test]
fn cancelled_pick_creates_nothing() {
    init_tracing();
    let (mut doc, _) = wall_with_two_doors();

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::cancelled(), VIEW)
        .unwrap_err();
    assert!(matches!(err, WallDimError::Selection(SelectionError::Cancelled)));
    assert!(doc.commits().is_empty());
}

#[test]
fn door_without_symbol_aborts_whole_command() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    doc.add_opening(
        wall,
        OpeningSpec::new(Category::Doors, 5.0, 0.8).without_symbol_geometry(),
    )
    .unwrap();

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap_err();
    assert!(matches!(
        err,
        WallDimError::Reference(ReferenceError::NoSymbolGeometry(_))
    ));
    assert!(err.to_string().starts_with("No Symbol Geometry found"));
    assert!(doc.commits().is_empty());
}

#[test]
fn window_without_anchor_is_left_out() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    doc.add_opening(
        wall,
        OpeningSpec::new(Category::Windows, 5.0, 1.0).without_anchors(),
    )
    .unwrap();

    DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap();
    assert_eq!(doc.commits()[0].chain.len(), 4);
}

#[test]
fn wall_without_geometry_is_rejected() {
    init_tracing();
    let mut doc = MemoryDocument::new();
    let wall = doc.add_element(
        ElementKind::Wall(walldim::host::WallInfo {
            baseline: Some((Point3::origin(), Point3::new(4.0, 0.0, 0.0))),
            orientation: walldim::math::Vector3::y(),
        }),
        None,
    );

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap_err();
    assert!(matches!(err, WallDimError::Geometry(GeometryError::NoGeometry(_))));
}

#[test]
fn curved_wall_has_no_placement_line() {
    init_tracing();
    let mut doc = MemoryDocument::new();
    let wall = doc
        .add_wall(
            WallSpec::new(Point3::origin(), Point3::new(6.0, 0.0, 0.0)).without_location_line(),
        )
        .unwrap();

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap_err();
    assert!(matches!(
        err,
        WallDimError::Geometry(GeometryError::MissingLocationLine(_))
    ));
}

#[test]
fn host_commit_failure_is_reported() {
    init_tracing();
    let (mut doc, wall) = wall_with_two_doors();
    doc.set_commit_failure(true);

    let err = DimensionWall::default()
        .execute(&mut doc, &mut ScriptedSelection::new([wall]), VIEW)
        .unwrap_err();
    assert!(matches!(err, WallDimError::Host(HostError::CommitFailed(_))));
    assert!(doc.commits().is_empty());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = DimensionConfig::default().with_categories(vec![]);
    assert!(matches!(
        DimensionWall::new(config),
        Err(WallDimError::Config(_))
    ));
}
