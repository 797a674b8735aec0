//! `kp-io` - Text I/O for the kronecker product runtime.
//!
//! Loads whitespace-delimited integer matrices from disk (memory-mapped) and
//! writes them back out with every column right-aligned.

pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

pub use error::{MatrixIoError, Result};
pub use format::{column_widths, digit_width, format_matrix, uniform_width, write_matrix, Layout};
pub use reader::{load_matrix, parse_matrix};
pub use writer::write_matrix_file;
