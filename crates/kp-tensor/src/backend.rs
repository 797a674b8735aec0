use std::fmt::Debug;

use crate::error::Result;
use crate::layout::BlockLayout;

/// Trait for pluggable compute backends.
///
/// Operands are passed as row-major `i32` slices together with the block
/// layout describing their shapes; the result is returned as an owned
/// row-major vector of `layout.output_shape()`.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Kronecker product: C = A ⊗ B.
    ///
    /// - `a`: row-major data of shape `layout.lhs()`
    /// - `b`: row-major data of shape `layout.rhs()`
    /// - Returns: row-major data of shape `layout.output_shape()`, where
    ///   `C[i*r2 + k][j*c2 + l] = A[i][j] * B[k][l]`
    fn kron(&self, a: &[i32], b: &[i32], layout: &BlockLayout) -> Result<Vec<i32>>;
}
