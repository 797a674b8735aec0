pub mod dispatch;
pub mod kron;

use crate::backend::ComputeBackend;
use crate::config::DEFAULT_WORKERS;
use crate::error::{Result, TensorError};
use crate::layout::BlockLayout;
use crate::partition::partition;
use crate::storage::BlockArena;

/// Pure-Rust CPU compute backend.
///
/// Splits the blocks of the output across a fixed number of OS threads.
/// Each worker owns a contiguous run of blocks in a block-major arena, so the
/// workers never share a mutable cell and need no locking.
#[derive(Debug, Clone)]
pub struct CpuBackend {
    workers: usize,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self::with_workers(DEFAULT_WORKERS)
    }

    /// A backend that dispatches onto `workers` threads. A count of zero is
    /// rejected when the first product is computed.
    pub fn with_workers(workers: usize) -> Self {
        CpuBackend { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn kron(&self, a: &[i32], b: &[i32], layout: &BlockLayout) -> Result<Vec<i32>> {
        if a.len() != layout.num_blocks() {
            return Err(TensorError::Other(format!(
                "kron: a.len()={} but expected {}={}",
                a.len(),
                layout.lhs(),
                layout.num_blocks()
            )));
        }
        if b.len() != layout.block_len() {
            return Err(TensorError::Other(format!(
                "kron: b.len()={} but expected {}={}",
                b.len(),
                layout.rhs(),
                layout.block_len()
            )));
        }

        let ranges = partition(layout.num_blocks(), self.workers)?;
        let mut arena = BlockArena::zeroed(*layout)?;
        let regions = arena.split_ranges(&ranges)?;
        dispatch::run_workers(regions, |region| kron::fill_blocks(a, b, layout, region))?;

        arena.into_row_major()
    }
}
