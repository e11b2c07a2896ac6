//! # Linear algebra
//!
//! Storage for augmented matrices of fractions.
use thiserror::Error;

use crate::data::number_types::FractionError;

pub mod matrix;

/// Errors raised while building a matrix from caller supplied values.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MatrixError {
    /// Flat buffer doesn't hold exactly `rows * columns` values.
    #[error("Dimension mismatch: expected {expected} values for a ({rows}, {columns}) matrix, got {actual}")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        expected: usize,
        actual: usize,
    },

    /// Rows of different lengths.
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    /// Text without a single cell.
    #[error("Cannot create a matrix from empty input")]
    Empty,

    /// A cell that is not a valid fraction.
    #[error("Invalid value at ({row}, {column}): {source}")]
    Parse {
        row: usize,
        column: usize,
        #[source]
        source: FractionError,
    },
}
