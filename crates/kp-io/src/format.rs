use std::io::{self, Write};

use kp_tensor::Matrix;

/// How values are padded when a matrix is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Each column right-aligned to its own widest value; values separated by
    /// one space, rows by `\n`, no trailing space or trailing newline.
    #[default]
    Columns,
    /// Every value right-aligned to the widest value of the whole matrix and
    /// followed by one space; every row terminated by `\n`.
    Uniform,
}

/// Number of characters `value` takes in decimal, including a minus sign.
///
/// `floor(log10(|v|)) + 1` digits, zero counting as one.
pub fn digit_width(value: i32) -> usize {
    let digits = value
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log as usize + 1);
    digits + usize::from(value < 0)
}

/// Printed width of the widest value in each column.
pub fn column_widths(matrix: &Matrix) -> Vec<usize> {
    let mut widths = vec![0; matrix.cols()];
    for row in matrix.iter_rows() {
        for (width, &value) in widths.iter_mut().zip(row) {
            *width = (*width).max(digit_width(value));
        }
    }
    widths
}

/// Printed width of the widest value in the matrix.
pub fn uniform_width(matrix: &Matrix) -> usize {
    matrix.data().iter().map(|&v| digit_width(v)).max().unwrap_or(0)
}

/// Write `matrix` to `out` using `layout`.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix, layout: Layout) -> io::Result<()> {
    match layout {
        Layout::Columns => {
            let widths = column_widths(matrix);
            for (i, row) in matrix.iter_rows().enumerate() {
                if i > 0 {
                    out.write_all(b"\n")?;
                }
                for (j, (&value, &width)) in row.iter().zip(&widths).enumerate() {
                    if j > 0 {
                        out.write_all(b" ")?;
                    }
                    write!(out, "{:>width$}", value, width = width)?;
                }
            }
        }
        Layout::Uniform => {
            let width = uniform_width(matrix);
            for row in matrix.iter_rows() {
                for &value in row {
                    write!(out, "{:>width$} ", value, width = width)?;
                }
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Render `matrix` to a string using `layout`.
pub fn format_matrix(matrix: &Matrix, layout: Layout) -> String {
    let mut buf = Vec::new();
    write_matrix(&mut buf, matrix, layout).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("formatted integers are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_matrix;
    use std::path::Path;

    fn m(rows: Vec<Vec<i32>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_digit_width() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(-5), 2);
        assert_eq!(digit_width(123), 3);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(-10), 3);
    }

    #[test]
    fn test_digit_width_matches_display() {
        for v in [
            i32::MIN,
            i32::MIN + 1,
            -1_000_000,
            -999_999,
            -1,
            1,
            99,
            100,
            1_000_000_000,
            i32::MAX,
        ] {
            assert_eq!(digit_width(v), v.to_string().len(), "value {}", v);
        }
    }

    #[test]
    fn test_column_widths() {
        let matrix = m(vec![vec![0, -5, 123], vec![1, 1, 1]]);
        assert_eq!(column_widths(&matrix), vec![1, 2, 3]);
        assert_eq!(uniform_width(&matrix), 3);
    }

    #[test]
    fn test_columns_layout() {
        let matrix = m(vec![
            vec![0, 5, 0, 10],
            vec![6, 7, 12, 14],
            vec![0, 15, 0, 20],
            vec![18, 21, 24, 28],
        ]);
        assert_eq!(
            format_matrix(&matrix, Layout::Columns),
            " 0  5  0 10\n 6  7 12 14\n 0 15  0 20\n18 21 24 28"
        );
    }

    #[test]
    fn test_columns_layout_negative() {
        let matrix = m(vec![vec![-1, 2], vec![3, -40]]);
        assert_eq!(format_matrix(&matrix, Layout::Columns), "-1   2\n 3 -40");
    }

    #[test]
    fn test_uniform_layout() {
        let matrix = m(vec![vec![1, -20], vec![3, 4]]);
        assert_eq!(format_matrix(&matrix, Layout::Uniform), "  1 -20 \n  3   4 \n");
    }

    #[test]
    fn test_empty_matrix_formats_to_nothing() {
        let matrix = m(vec![]);
        assert_eq!(format_matrix(&matrix, Layout::Columns), "");
        assert_eq!(format_matrix(&matrix, Layout::Uniform), "");
    }

    #[test]
    fn test_parse_format_roundtrip() {
        let original = m(vec![vec![i32::MIN, 0, 7], vec![-3, 12345, i32::MAX]]);
        for layout in [Layout::Columns, Layout::Uniform] {
            let text = format_matrix(&original, layout);
            let parsed = parse_matrix(&text, Path::new("<roundtrip>"), 10).unwrap();
            assert_eq!(parsed, original);
        }
    }
}
