use thiserror::Error;

/// Custom error type for the scalargrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Cycle detected in the computation graph at node {node} during backward pass.")]
    CycleDetected { node: String },

    #[error("Operation '{operation}' requires a leaf node, but the node was produced by an operator")]
    NotALeaf { operation: String },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot operate on an empty dataset")]
    EmptyDataset,

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Loss became non-finite ({value}) at epoch {epoch}")]
    NonFiniteLoss { epoch: usize, value: f64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}
