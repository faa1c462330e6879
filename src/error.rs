use thiserror::Error;

pub type Result<T> = std::result::Result<T, NDArrayError>;

/// Errors raised by array construction, checked indexing and elementwise ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NDArrayError {
    #[error("Size mismatch: left operand has shape {left:?}, right operand has shape {right:?}")]
    SizeMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("Rank mismatch: expected {expected} indices, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("Index {index} out of range for axis {axis} with extent {extent}")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },

    #[error("Shape {shape:?} holds more elements than fit in usize")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("Invalid shape {shape:?} for buffer of length {len}")]
    BufferLength { shape: Vec<usize>, len: usize },

    #[error("Unknown element kind: {0}. Expected one of f32, float, single, f64, double")]
    UnknownKind(String),
}
