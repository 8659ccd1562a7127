//! Error types for utility functions.

use dynalpha_primitives::PeriodError;

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unparseable period value.
    #[error("invalid period in row {row}: {source}")]
    Period {
        /// Row index in the input frame.
        row: usize,
        /// Parse failure.
        source: PeriodError,
    },

    /// Null in a required column.
    #[error("null value in column {column} at row {row}")]
    NullValue {
        /// Column name.
        column: &'static str,
        /// Row index in the input frame.
        row: usize,
    },
}
