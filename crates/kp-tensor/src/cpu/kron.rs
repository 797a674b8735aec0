use crate::error::{Result, TensorError};
use crate::layout::BlockLayout;
use crate::storage::BlockRegion;

/// Fill every block of `region` with its scaled copy of `b`.
///
/// For each flat index `idx` in the region's range, `(i, j)` is decoded from
/// `idx` and the block receives `a[i][j] * b[k][l]` at local offset `(k, l)`.
/// Only `region` is written.
pub fn fill_blocks(
    a: &[i32],
    b: &[i32],
    layout: &BlockLayout,
    region: &mut BlockRegion<'_>,
) -> Result<()> {
    let lhs = layout.lhs();
    let rhs = layout.rhs();

    for idx in region.range().indices() {
        let (i, j) = layout.decode(idx);
        let scale = a[lhs.offset(i, j)];
        let (row0, col0) = layout.anchor(idx);
        let block = region.block_mut(idx);

        for k in 0..rhs.rows() {
            for l in 0..rhs.cols() {
                let off = rhs.offset(k, l);
                block[off] = scale.checked_mul(b[off]).ok_or(TensorError::Overflow {
                    row: row0 + k,
                    col: col0 + l,
                    lhs: scale,
                    rhs: b[off],
                })?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::WorkRange;
    use crate::shape::Shape;
    use crate::storage::BlockArena;

    #[test]
    fn test_fill_only_owned_blocks() {
        let layout = BlockLayout::new(Shape::new(2, 2), Shape::new(1, 2)).unwrap();
        let a = [1, 2, 3, 4];
        let b = [10, -1];
        let mut arena = BlockArena::zeroed(layout).unwrap();
        {
            let ranges = [WorkRange::new(0, 1), WorkRange::new(1, 3), WorkRange::new(3, 4)];
            let mut regions = arena.split_ranges(&ranges).unwrap();
            fill_blocks(&a, &b, &layout, &mut regions[1]).unwrap();
        }
        assert_eq!(arena.block(0), &[0, 0]);
        assert_eq!(arena.block(1), &[20, -2]);
        assert_eq!(arena.block(2), &[30, -3]);
        assert_eq!(arena.block(3), &[0, 0]);
    }

    #[test]
    fn test_empty_range_does_nothing() {
        let layout = BlockLayout::new(Shape::new(1, 1), Shape::new(1, 1)).unwrap();
        let mut arena = BlockArena::zeroed(layout).unwrap();
        let ranges = [WorkRange::new(0, 0), WorkRange::new(0, 1)];
        let mut regions = arena.split_ranges(&ranges).unwrap();
        fill_blocks(&[5], &[5], &layout, &mut regions[0]).unwrap();
    }

    #[test]
    fn test_overflow_reports_output_cell() {
        let layout = BlockLayout::new(Shape::new(1, 2), Shape::new(2, 1)).unwrap();
        let a = [1, i32::MAX];
        let b = [1, 2];
        let mut arena = BlockArena::zeroed(layout).unwrap();
        let mut regions = arena.split_ranges(&[WorkRange::new(0, 2)]).unwrap();
        let err = fill_blocks(&a, &b, &layout, &mut regions[0]).unwrap_err();
        match err {
            TensorError::Overflow { row, col, lhs, rhs } => {
                assert_eq!((row, col), (1, 1));
                assert_eq!((lhs, rhs), (i32::MAX, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
