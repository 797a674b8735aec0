use crate::error::{Result, TensorError};
use std::fmt;

/// The dimensions of a 2-D matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a new shape from a row and column count.
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, or `None` if `rows * cols` overflows.
    pub fn checked_numel(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Total number of elements.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows. Shapes built from real buffers never do.
    pub fn numel(&self) -> usize {
        self.checked_numel()
            .unwrap_or_else(|| panic!("shape {} overflows usize", self))
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Row-major flat offset of `(row, col)`.
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns true if both dimensions are at most `max_dim`.
    pub fn fits_within(&self, max_dim: usize) -> bool {
        self.rows <= max_dim && self.cols <= max_dim
    }

    /// Shape of the Kronecker product `self ⊗ other`:
    /// `[self.rows * other.rows, self.cols * other.cols]`.
    ///
    /// Fails if any of the products, or the element count of the result,
    /// overflows `usize`.
    pub fn kron(&self, other: &Shape) -> Result<Shape> {
        let overflow = || TensorError::ShapeOverflow {
            a: self.to_string(),
            b: other.to_string(),
        };
        let rows = self.rows.checked_mul(other.rows).ok_or_else(overflow)?;
        let cols = self.cols.checked_mul(other.cols).ok_or_else(overflow)?;
        let shape = Shape::new(rows, cols);
        shape.checked_numel().ok_or_else(overflow)?;
        Ok(shape)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}
