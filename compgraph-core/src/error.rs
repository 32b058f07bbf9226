use crate::coordinate::Coordinate;
use thiserror::Error;

/// Custom error type for the compgraph engine.
///
/// Every variant describes a contract violation by the caller: the graph was
/// built or driven incorrectly. Operations return the error before mutating
/// any state, so a failed call leaves the graph exactly as it was.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum CompGraphError {
    #[error("Coordinate {coordinate} is out of bounds for graph shape {shape:?}")]
    CoordinateOutOfBounds {
        coordinate: Coordinate,
        shape: Vec<usize>,
    },

    #[error("Graph shape must contain at least one layer")]
    EmptyShape,

    #[error("Layer {layer} has no nodes")]
    EmptyLayer { layer: usize },

    #[error("Cannot join {parent} -> {child}: parent layer must be strictly below child layer")]
    LayerOrder { parent: Coordinate, child: Coordinate },

    #[error("Edge {parent} -> {child} already exists")]
    DuplicateEdge { parent: Coordinate, child: Coordinate },

    #[error("Edge {parent} -> {child} does not exist")]
    MissingEdge { parent: Coordinate, child: Coordinate },

    #[error("Node {coordinate} ({operator}) accepts {expected} parent(s), found {actual}")]
    ArityViolation {
        coordinate: Coordinate,
        operator: String,
        expected: String,
        actual: usize,
    },

    #[error("Node {coordinate} has no operator installed")]
    UnsetNode { coordinate: Coordinate },

    #[error("Expected {expected} input value(s), got {actual}")]
    InputCountMismatch { expected: usize, actual: usize },

    #[error("Length mismatch during {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid derivative chain: {0}")]
    InvalidChain(String),

    #[error("Derivative chain endpoint mismatch: expected {expected}, got {actual}")]
    ChainEndpointMismatch {
        expected: Coordinate,
        actual: Coordinate,
    },

    #[error("Node {coordinate} must be an Input node for {operation}")]
    NotAnInput {
        coordinate: Coordinate,
        operation: String,
    },

    #[error("Node {coordinate} is listed more than once among weights and static inputs")]
    DuplicateCoordinate { coordinate: Coordinate },

    #[error("Invalid optimizer configuration: {0}")]
    InvalidConfig(String),

    #[error("Sample index {index} is out of bounds for a dataset of {len} sample(s)")]
    SampleOutOfBounds { index: usize, len: usize },

    #[error("Batch size must be at least 1")]
    ZeroBatchSize,

    #[error("Optimizer needs at least one batch")]
    NoBatches,

    #[error("Batch {index} contains no samples")]
    EmptyBatch { index: usize },

    #[error("Gradient for weight {weight} became non-finite ({value}) at iteration {iteration}")]
    NonFiniteGradient {
        weight: usize,
        iteration: usize,
        value: f64,
    },
}
