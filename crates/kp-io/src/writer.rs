use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use kp_tensor::Matrix;

use crate::error::{MatrixIoError, Result};
use crate::format::{write_matrix, Layout};

/// Write `matrix` to `path` in the column-aligned layout, replacing any
/// existing file.
pub fn write_matrix_file(path: &Path, matrix: &Matrix) -> Result<()> {
    let file = File::create(path).map_err(MatrixIoError::io(path))?;
    let mut out = BufWriter::new(file);
    write_matrix(&mut out, matrix, Layout::Columns).map_err(MatrixIoError::io(path))?;
    out.flush().map_err(MatrixIoError::io(path))?;

    tracing::debug!(path = %path.display(), shape = %matrix.shape(), "wrote matrix");
    Ok(())
}
