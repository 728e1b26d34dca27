use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grid from external input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read pattern file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pattern contains no rows")]
    EmptyPattern,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    InvalidCellChar { row: usize, col: usize, found: char },
    #[error("unexpected cell value {found} at row {row}, column {col}")]
    InvalidCellValue { row: usize, col: usize, found: u8 },
}
