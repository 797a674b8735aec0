use crate::error::Result;
use crate::shape::Shape;

/// Addressing scheme of a Kronecker product `lhs ⊗ rhs`.
///
/// The output is a grid of `lhs.rows() x lhs.cols()` blocks, each of shape
/// `rhs`. Block `idx` is the flat row-major index of the `lhs` element that
/// scales it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    lhs: Shape,
    rhs: Shape,
    output: Shape,
}

impl BlockLayout {
    /// Build the layout for `lhs ⊗ rhs`, failing if the output shape overflows.
    pub fn new(lhs: Shape, rhs: Shape) -> Result<Self> {
        let output = lhs.kron(&rhs)?;
        Ok(BlockLayout { lhs, rhs, output })
    }

    pub fn lhs(&self) -> Shape {
        self.lhs
    }

    pub fn rhs(&self) -> Shape {
        self.rhs
    }

    pub fn output_shape(&self) -> Shape {
        self.output
    }

    /// Number of blocks, one per element of the left operand.
    pub fn num_blocks(&self) -> usize {
        self.lhs.numel()
    }

    /// Number of elements in one block.
    pub fn block_len(&self) -> usize {
        self.rhs.numel()
    }

    /// Decode a flat block index into its left-operand coordinate `(i, j)`.
    pub fn decode(&self, idx: usize) -> (usize, usize) {
        (idx / self.lhs.cols(), idx % self.lhs.cols())
    }

    /// Output coordinate of the top-left cell of block `idx`.
    pub fn anchor(&self, idx: usize) -> (usize, usize) {
        let (i, j) = self.decode(idx);
        (i * self.rhs.rows(), j * self.rhs.cols())
    }
}
