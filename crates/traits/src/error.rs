//! Factor evaluation errors.

use dynalpha_math::MathError;
use dynalpha_primitives::Period;

/// Reasons a factor value is unavailable at an index.
///
/// None of these abort a run: calculators turn them into absent values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorError {
    /// Not enough history before the index.
    #[error("insufficient history: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        /// Required number of observations.
        required: usize,
        /// Available number of observations.
        actual: usize,
    },

    /// The benchmark has no observation for a period the window needs.
    #[error("benchmark has no return for period {period}")]
    MappingMismatch {
        /// The unmapped period.
        period: Period,
    },

    /// Benchmark variance over the window is zero.
    #[error("degenerate benchmark variance")]
    DegenerateVariance,

    /// Input slices disagree in length.
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
        /// Which input.
        context: &'static str,
    },

    /// Index outside the period axis.
    #[error("index {index} out of range for axis of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Axis length.
        len: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Math error.
    #[error("math error: {0}")]
    Math(MathError),
}

impl FactorError {
    /// Whether this error only marks a single value as unavailable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientHistory { .. }
                | Self::MappingMismatch { .. }
                | Self::DegenerateVariance
        )
    }
}

impl From<MathError> for FactorError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ZeroVariance => Self::DegenerateVariance,
            MathError::InsufficientObservations { required, actual } => {
                Self::InsufficientHistory { required, actual }
            }
            other => Self::Math(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_variance_maps_to_degenerate() {
        assert_eq!(FactorError::from(MathError::ZeroVariance), FactorError::DegenerateVariance);
    }

    #[test]
    fn insufficient_observations_maps_to_history() {
        let err = FactorError::from(MathError::InsufficientObservations { required: 2, actual: 1 });
        assert_eq!(err, FactorError::InsufficientHistory { required: 2, actual: 1 });
        assert!(err.is_recoverable());
    }

    #[test]
    fn config_errors_are_not_recoverable() {
        let err = FactorError::InvalidConfig("bad window".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "invalid configuration: bad window");
    }

    #[test]
    fn mapping_mismatch_display() {
        let err = FactorError::MappingMismatch { period: "2024-02".parse().unwrap() };
        assert_eq!(err.to_string(), "benchmark has no return for period 2024-02");
    }
}
