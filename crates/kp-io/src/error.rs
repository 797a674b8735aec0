use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixIoError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: file is empty", .path.display())]
    Empty { path: PathBuf },
    #[error("{}: file is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },
    #[error("{}: line {line} has {got} values, expected {expected}", .path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("{}: line {line}: invalid integer {token:?}", .path.display())]
    InvalidToken {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error(
        "{}: matrix is {rows}x{cols}, exceeding the maximum dimension {max_dim}",
        .path.display()
    )]
    DimensionExceeded {
        path: PathBuf,
        rows: usize,
        cols: usize,
        max_dim: usize,
    },
}

impl MatrixIoError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> MatrixIoError {
        let path = path.into();
        move |source| MatrixIoError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, MatrixIoError>;
