use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use kp_tensor::{Matrix, Shape};

use crate::error::{MatrixIoError, Result};

/// Load a whitespace-delimited integer matrix from disk.
///
/// The file is memory-mapped and parsed with [`parse_matrix`]. Files whose
/// row or column count exceeds `max_dim` are rejected before any value is
/// parsed.
pub fn load_matrix(path: &Path, max_dim: usize) -> Result<Matrix> {
    let file = File::open(path).map_err(MatrixIoError::io(path))?;
    let len = file.metadata().map_err(MatrixIoError::io(path))?.len();
    if len == 0 {
        return Err(MatrixIoError::Empty {
            path: path.to_path_buf(),
        });
    }

    // The mapping is only read, and is dropped before this function returns.
    let mmap = unsafe { Mmap::map(&file) }.map_err(MatrixIoError::io(path))?;
    let text = std::str::from_utf8(&mmap).map_err(|_| MatrixIoError::Encoding {
        path: path.to_path_buf(),
    })?;

    let matrix = parse_matrix(text, path, max_dim)?;
    tracing::debug!(
        path = %path.display(),
        bytes = len,
        shape = %matrix.shape(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Parse a matrix from text.
///
/// The row count is the number of lines, ignoring blank lines at the end of
/// the text; the column count is the number of tokens on the first line.
/// Every row must have exactly that many tokens, and every token must be a
/// decimal `i32`. `origin` names the source in error messages.
pub fn parse_matrix(text: &str, origin: &Path, max_dim: usize) -> Result<Matrix> {
    let lines: Vec<&str> = text.lines().collect();
    let rows = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    if rows == 0 {
        return Err(MatrixIoError::Empty {
            path: origin.to_path_buf(),
        });
    }
    let lines = &lines[..rows];
    let cols = lines[0].split_whitespace().count();

    if rows > max_dim || cols > max_dim {
        return Err(MatrixIoError::DimensionExceeded {
            path: origin.to_path_buf(),
            rows,
            cols,
            max_dim,
        });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for (n, line) in lines.iter().enumerate() {
        let before = data.len();
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|_| MatrixIoError::InvalidToken {
                path: origin.to_path_buf(),
                line: n + 1,
                token: token.to_string(),
            })?;
            data.push(value);
        }

        let got = data.len() - before;
        if got != cols {
            return Err(MatrixIoError::RaggedRow {
                path: origin.to_path_buf(),
                line: n + 1,
                expected: cols,
                got,
            });
        }
    }

    Ok(Matrix::new(data, Shape::new(rows, cols)))
}
