//! Error types for grid construction and rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid cell text: {0}")]
    InvalidTextType(String),

    #[error("Invalid alignment {0:?}: should be left, right or center")]
    InvalidAlignment(String),

    #[error("Row {row} must be a sequence of cells")]
    InvalidRowType { row: usize },

    #[error("Entry ({row}, {column}) must be a cell")]
    InvalidCellType { row: usize, column: usize },

    #[error("Grid cannot be empty")]
    EmptyGrid,

    #[error("Invalid output mode {0:?}: should be joined or lines")]
    InvalidOutputMode(String),

    #[error("Failed to parse document: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
