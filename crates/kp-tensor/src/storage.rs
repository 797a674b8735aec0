use crate::error::{Result, TensorError};
use crate::layout::BlockLayout;
use crate::partition::WorkRange;

/// Output buffer of a Kronecker product, stored block-major.
///
/// Block `idx` occupies `[idx * block_len, (idx + 1) * block_len)`, so a
/// contiguous range of block indices is a contiguous slice of the arena and
/// can be handed to a worker as an exclusive borrow.
#[derive(Debug)]
pub struct BlockArena {
    data: Vec<i32>,
    layout: BlockLayout,
}

impl BlockArena {
    /// Allocate a zero-filled arena sized exactly to the layout's output.
    ///
    /// # Errors
    /// Returns `TensorError::Allocation` if the buffer cannot be reserved.
    pub fn zeroed(layout: BlockLayout) -> Result<Self> {
        let n = layout.output_shape().numel();
        Ok(BlockArena {
            data: try_alloc_zeroed(n)?,
            layout,
        })
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Number of elements in the arena.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the arena contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The data of block `idx`.
    pub fn block(&self, idx: usize) -> &[i32] {
        let len = self.layout.block_len();
        &self.data[idx * len..(idx + 1) * len]
    }

    /// Split the arena into one exclusive region per work range.
    ///
    /// The ranges must be ordered, contiguous and cover every block exactly,
    /// as produced by [`crate::partition::partition`].
    pub fn split_ranges(&mut self, ranges: &[WorkRange]) -> Result<Vec<BlockRegion<'_>>> {
        let block_len = self.layout.block_len();
        let num_blocks = self.layout.num_blocks();
        let mut regions = Vec::with_capacity(ranges.len());
        let mut rest: &mut [i32] = &mut self.data;
        let mut next = 0;

        for &range in ranges {
            if range.start != next || range.end < range.start {
                return Err(TensorError::Other(format!(
                    "work range {}..{} does not start at block {}",
                    range.start, range.end, next
                )));
            }
            if range.end > num_blocks {
                return Err(TensorError::Other(format!(
                    "work range {}..{} exceeds {} blocks",
                    range.start, range.end, num_blocks
                )));
            }
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * block_len);
            regions.push(BlockRegion {
                range,
                block_len,
                data: head,
            });
            rest = tail;
            next = range.end;
        }

        if next != num_blocks {
            return Err(TensorError::Other(format!(
                "work ranges cover {} of {} blocks",
                next, num_blocks
            )));
        }
        Ok(regions)
    }

    /// Re-lay the arena out as row-major data of the output shape.
    pub fn into_row_major(self) -> Result<Vec<i32>> {
        let layout = self.layout;
        let out_shape = layout.output_shape();
        let rhs = layout.rhs();
        let mut out = try_alloc_zeroed(self.data.len())?;

        for idx in 0..layout.num_blocks() {
            let (row0, col0) = layout.anchor(idx);
            let block = self.block(idx);
            for k in 0..rhs.rows() {
                let dst = out_shape.offset(row0 + k, col0);
                let src = rhs.offset(k, 0);
                out[dst..dst + rhs.cols()].copy_from_slice(&block[src..src + rhs.cols()]);
            }
        }
        Ok(out)
    }
}

/// The blocks of one work range, borrowed exclusively from a [`BlockArena`].
#[derive(Debug)]
pub struct BlockRegion<'a> {
    range: WorkRange,
    block_len: usize,
    data: &'a mut [i32],
}

impl BlockRegion<'_> {
    pub fn range(&self) -> WorkRange {
        self.range
    }

    /// Mutable access to block `idx`, which must lie inside this region's range.
    ///
    /// # Panics
    /// Panics if `idx` is outside the range.
    pub fn block_mut(&mut self, idx: usize) -> &mut [i32] {
        assert!(
            idx >= self.range.start && idx < self.range.end,
            "block {} outside work range {}..{}",
            idx,
            self.range.start,
            self.range.end
        );
        let local = idx - self.range.start;
        &mut self.data[local * self.block_len..(local + 1) * self.block_len]
    }
}

fn try_alloc_zeroed(elements: usize) -> Result<Vec<i32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| TensorError::Allocation { elements })?;
    data.resize(elements, 0);
    Ok(data)
}
