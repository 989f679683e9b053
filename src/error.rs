use thiserror::Error;

use crate::host::ElementId;

/// Top-level error type for the wall dimensioning pipeline.
#[derive(Debug, Error)]
pub enum WallDimError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors caused by what the user picked.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selection was cancelled")]
    Cancelled,

    #[error("the picked element {0} does not exist in the document")]
    ElementNotFound(ElementId),

    #[error("The selected element is not a wall.")]
    NotAWall(ElementId),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("element {0} has no geometry")]
    NoGeometry(ElementId),

    #[error("no planar face matches the orientation ({x:.6}, {y:.6}, {z:.6})")]
    NoMatchingFace { x: f64, y: f64, z: f64 },

    #[error("insufficient vertical edges: found {found}, need 2")]
    InsufficientVerticalEdges { found: usize },

    #[error("wall {0} has no straight location line")]
    MissingLocationLine(ElementId),

    #[error("{0} carries no geometry reference")]
    MissingReference(&'static str),
}

/// Errors related to topological lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,
}

/// Errors related to geometry construction operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors produced while building or parsing stable references.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("stable reference {repr:?} has {found} tokens, at least 4 required")]
    TooFewTokens { repr: String, found: usize },

    #[error("stable reference {repr:?} has a non-numeric index token {token:?}")]
    InvalidIndex { repr: String, token: String },

    #[error("unknown special reference kind {0:?}")]
    UnknownKind(String),

    #[error("No Symbol Geometry found for element {0}")]
    NoSymbolGeometry(ElementId),
}

/// Errors reported by the host application.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("dimension commit failed: {0}")]
    CommitFailed(String),

    #[error("element {0} is not known to the host")]
    UnknownElement(ElementId),
}

/// Errors in a [`DimensionConfig`](crate::config::DimensionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("offset distance must be finite, got {0}")]
    InvalidOffset(f64),

    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("at least one opening category is required")]
    NoCategories,

    #[error("transaction name must not be empty")]
    EmptyTransactionName,
}

/// Convenience type alias for results using [`WallDimError`].
pub type Result<T> = std::result::Result<T, WallDimError>;
