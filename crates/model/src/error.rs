//! Error types for the model pipeline.

use dynalpha_primitives::Symbol;
use dynalpha_traits::FactorError;

/// Errors that can occur while running the model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The store holds no usable observations for the symbol.
    #[error("no usable observations for {0}")]
    EmptySeries(Symbol),

    /// Factor error.
    #[error("factor error: {0}")]
    Factor(#[from] FactorError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Returns whether the run can continue past this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::EmptySeries(_) => true,
            Self::Factor(err) => err.is_recoverable(),
            Self::InvalidConfig(_) => false,
        }
    }
}

/// Why an instrument left a pipeline run before ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    /// No usable price observations.
    #[error("empty series")]
    EmptySeries,

    /// Sector metadata could not be resolved.
    #[error("sector unresolved")]
    SectorUnresolved,

    /// No period produced a DAM score under the active scoring policy.
    #[error("no dam score")]
    NoScore,

    /// The factor table could not be built.
    #[error("{0}")]
    Failed(ModelError),
}

impl From<ModelError> for SkipReason {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::EmptySeries(_) => Self::EmptySeries,
            other => Self::Failed(other),
        }
    }
}
