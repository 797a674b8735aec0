use crate::backend::ComputeBackend;
use crate::error::{Result, TensorError};
use crate::layout::BlockLayout;
use crate::shape::Shape;

/// A dense, row-major matrix of `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    shape: Shape,
}

impl Matrix {
    /// Create a new matrix from row-major data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<i32>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Matrix { data, shape }
    }

    /// Build a matrix from its rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = Shape::new(rows.len(), cols);
        let mut data = Vec::with_capacity(shape.numel());
        for row in rows {
            if row.len() != cols {
                return Err(TensorError::ShapeMismatch {
                    expected: format!("row of {} values", cols),
                    got: format!("row of {} values", row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Matrix { data, shape })
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        Matrix {
            data: vec![0; shape.numel()],
            shape,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Consume the matrix, returning its row-major data.
    pub fn into_data(self) -> Vec<i32> {
        self.data
    }

    /// Element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[self.shape.offset(row, col)])
        } else {
            None
        }
    }

    /// Row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[i32] {
        let start = self.shape.offset(row, 0);
        &self.data[start..start + self.cols()]
    }

    /// Iterate over the rows of the matrix.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows()).map(move |r| self.row(r))
    }

    /// Kronecker product `self ⊗ other` computed by the given backend.
    ///
    /// self is [r1, c1], other is [r2, c2], result is [r1*r2, c1*c2].
    pub fn kron(&self, other: &Matrix, backend: &dyn ComputeBackend) -> Result<Matrix> {
        let layout = BlockLayout::new(self.shape, other.shape)?;
        let data = backend.kron(&self.data, &other.data, &layout)?;
        Ok(Matrix::new(data, layout.output_shape()))
    }
}
