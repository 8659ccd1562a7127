//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Too few observations for the estimator.
    #[error("insufficient observations: need at least {required}, got {actual}")]
    InsufficientObservations {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Denominator variance is zero (or numerically indistinguishable from it).
    #[error("zero variance in denominator")]
    ZeroVariance,

    /// Numerical instability (NaN or Inf).
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}
