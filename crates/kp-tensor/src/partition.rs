use std::ops::Range;

use crate::error::{Result, TensorError};

/// A half-open interval `[start, end)` over the flattened index space of the
/// left operand, owned by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    pub start: usize,
    pub end: usize,
}

impl WorkRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted work range {}..{}", start, end);
        WorkRange { start, end }
    }

    /// Number of flat indices in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the worker owning this range has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range as a `std::ops::Range`, for iteration.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, numel)` into `workers` contiguous ranges.
///
/// Every range but the last holds `numel / workers` indices; the last one
/// absorbs the remainder. When `numel < workers` the leading ranges are empty.
pub fn partition(numel: usize, workers: usize) -> Result<Vec<WorkRange>> {
    if workers == 0 {
        return Err(TensorError::InvalidConfig(
            "worker count must be at least 1".to_string(),
        ));
    }

    let per_worker = numel / workers;
    let ranges = (0..workers)
        .map(|w| {
            let start = w * per_worker;
            let end = if w == workers - 1 {
                numel
            } else {
                (w + 1) * per_worker
            };
            WorkRange::new(start, end)
        })
        .collect();
    Ok(ranges)
}
