use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },
    #[error("{operand} is {rows}x{cols}, exceeding the maximum dimension {max_dim}")]
    DimensionExceeded {
        operand: &'static str,
        rows: usize,
        cols: usize,
        max_dim: usize,
    },
    #[error("output shape overflows usize: [{a}] x [{b}]")]
    ShapeOverflow { a: String, b: String },
    #[error("integer overflow at output cell ({row}, {col}): {lhs} * {rhs}")]
    Overflow {
        row: usize,
        col: usize,
        lhs: i32,
        rhs: i32,
    },
    #[error("failed to allocate output buffer of {elements} elements")]
    Allocation { elements: usize },
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;
