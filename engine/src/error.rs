use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid side length must be positive, got {side}")]
    InvalidDimension { side: usize },

    #[error("grid is not square: row {row} has {found} cells, expected {expected}")]
    InvalidGridShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell value {value} at ({row}, {col}), expected 1 or -1")]
    InvalidCellValue { row: usize, col: usize, value: i8 },

    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    #[error("pattern {name} needs a {rows}x{cols} area but the grid side is {side}")]
    PatternTooLarge {
        name: String,
        rows: usize,
        cols: usize,
        side: usize,
    },

    #[error("grid side {found} does not match the expected side {expected}")]
    SideMismatch { expected: usize, found: usize },

    #[error("position ({row}, {col}) is outside a {side}x{side} grid")]
    OutOfBounds { row: usize, col: usize, side: usize },

    #[error("unrecognised character {ch:?} at line {line}")]
    Parse { line: usize, ch: char },
}

pub type Result<T> = std::result::Result<T, GridError>;
