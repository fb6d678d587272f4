//! Error types for dataset validation.
//!
//! Raised when the injury table does not match the expected before/after-22 schema.

use thiserror::Error;

/// Errors that can occur while validating the winger injury table.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    /// A required column is absent after header normalisation.
    #[error("Required column '{column}' not found. Available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// A name, position or count cell is empty.
    #[error("Column '{column}' has a missing value at row {row}")]
    NullValue { column: String, row: usize },

    /// A count is negative or not a whole number.
    #[error("Column '{column}' for player '{player}' must be a non-negative integer, got {value}")]
    InvalidCount {
        column: String,
        player: String,
        value: String,
    },

    /// The file has a header but no data rows.
    #[error("Dataset contains zero data rows")]
    Empty,
}
