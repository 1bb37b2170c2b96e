use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IslandsError {
    #[error("row {row} has {actual} cells, expected {expected}")]
    InvalidGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{rows}x{cols} grid needs {} cells, got {actual}", .rows * .cols)]
    CellCount {
        rows: usize,
        cols: usize,
        actual: usize,
    },

    #[error("seed ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid {format} grid: {message}")]
    Format {
        format: &'static str,
        message: String,
    },
}
