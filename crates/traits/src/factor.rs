//! Factor trait definitions.

use dynalpha_primitives::Period;

use crate::FactorError;

/// The kind of factor in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    /// Price momentum of the instrument itself.
    Momentum,
    /// Lagged benchmark returns used for market timing.
    MarketTiming,
    /// Sensitivity to the benchmark.
    Risk,
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Momentum => write!(f, "momentum"),
            Self::MarketTiming => write!(f, "market_timing"),
            Self::Risk => write!(f, "risk"),
        }
    }
}

/// Per-instrument inputs shared by every factor calculator.
///
/// All slices are laid out on the instrument's own period axis, oldest
/// first: `excess[i]` is the instrument's excess return ending at
/// `periods[i]` (absent at index 0), and `benchmark[i]` is the benchmark's
/// excess return for the same period (absent when unmapped).
#[derive(Debug, Clone, Copy)]
pub struct FactorInputs<'a> {
    periods: &'a [Period],
    closes: &'a [f64],
    excess: &'a [Option<f64>],
    benchmark: &'a [Option<f64>],
}

impl<'a> FactorInputs<'a> {
    /// Bundle the per-instrument slices.
    ///
    /// # Errors
    /// Returns `FactorError::DimensionMismatch` unless every slice has the
    /// same length as `periods`.
    pub fn new(
        periods: &'a [Period],
        closes: &'a [f64],
        excess: &'a [Option<f64>],
        benchmark: &'a [Option<f64>],
    ) -> Result<Self, FactorError> {
        let expected = periods.len();
        for (actual, context) in
            [(closes.len(), "closes"), (excess.len(), "excess"), (benchmark.len(), "benchmark")]
        {
            if actual != expected {
                return Err(FactorError::DimensionMismatch { expected, actual, context });
            }
        }
        Ok(Self { periods, closes, excess, benchmark })
    }

    /// Length of the period axis.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.periods.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Period axis.
    #[must_use]
    pub const fn periods(&self) -> &'a [Period] {
        self.periods
    }

    /// Closing prices.
    #[must_use]
    pub const fn closes(&self) -> &'a [f64] {
        self.closes
    }

    /// Instrument excess returns.
    #[must_use]
    pub const fn excess(&self) -> &'a [Option<f64>] {
        self.excess
    }

    /// Benchmark excess returns mapped onto this axis.
    #[must_use]
    pub const fn benchmark(&self) -> &'a [Option<f64>] {
        self.benchmark
    }

    /// Benchmark value at `index`, or the mismatch that makes it unavailable.
    ///
    /// # Errors
    /// Returns `FactorError::OutOfRange` past the axis and
    /// `FactorError::MappingMismatch` if the period is unmapped.
    pub fn benchmark_at(&self, index: usize) -> Result<f64, FactorError> {
        match self.benchmark.get(index) {
            None => Err(FactorError::OutOfRange { index, len: self.len() }),
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(FactorError::MappingMismatch { period: self.periods[index] }),
        }
    }

    /// Check that `index` has at least `lookback` prior observations.
    ///
    /// # Errors
    /// Returns `FactorError::OutOfRange` past the axis and
    /// `FactorError::InsufficientHistory` for indices before `lookback`.
    pub const fn require_history(&self, index: usize, lookback: usize) -> Result<(), FactorError> {
        if index >= self.len() {
            return Err(FactorError::OutOfRange { index, len: self.len() });
        }
        if index < lookback {
            return Err(FactorError::InsufficientHistory {
                required: lookback + 1,
                actual: index + 1,
            });
        }
        Ok(())
    }
}

/// A factor evaluated over a per-instrument rolling window.
///
/// Implementations are pure functions of their configuration and the
/// [`FactorInputs`]; they hold no state between calls.
pub trait RollingFactor: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this factor, in snake_case.
    fn name(&self) -> &str;

    /// Human-readable description of what this factor measures.
    fn description(&self) -> &str;

    /// Factor kind.
    fn kind(&self) -> FactorKind;

    /// Number of prior observations an index needs before it can be evaluated.
    fn lookback(&self) -> usize;

    /// Evaluate the factor at one index of the period axis.
    ///
    /// # Errors
    /// Returns a [`FactorError`] describing why the value is unavailable.
    fn evaluate(&self, inputs: &FactorInputs<'_>, index: usize) -> Result<f64, FactorError>;

    /// Evaluate every index, marking unavailable values as `None`.
    fn compute(&self, inputs: &FactorInputs<'_>) -> Vec<Option<f64>> {
        (0..inputs.len()).map(|i| self.evaluate(inputs, i).ok()).collect()
    }
}

/// Marker trait for factor configuration types.
pub trait FactorConfig: Default + Clone + Send + Sync + std::fmt::Debug {}

impl<T: Default + Clone + Send + Sync + std::fmt::Debug> FactorConfig for T {}

/// A factor that supports runtime configuration.
pub trait ConfigurableFactor: RollingFactor {
    /// Configuration type for this factor.
    type Config: FactorConfig;

    /// Create a new factor with the given configuration.
    ///
    /// # Errors
    /// Returns `FactorError::InvalidConfig` if the configuration is unusable.
    fn with_config(config: Self::Config) -> Result<Self, FactorError>
    where
        Self: Sized;

    /// Returns the current configuration.
    fn config(&self) -> &Self::Config;
}
