//! Market-weighted lagged return factor.

use dynalpha_math::weighted_sum;
use dynalpha_primitives::LagWeights;
use dynalpha_traits::{ConfigurableFactor, FactorError, FactorInputs, FactorKind, RollingFactor};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Configuration for the market-weighted return factor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightedMarketReturnConfig {
    /// Loadings on the preceding benchmark excess returns, oldest lag first.
    pub weights: LagWeights,
}

/// Fixed-weight blend of the benchmark's excess returns at the periods
/// immediately preceding each index.
///
/// With the default loadings:
/// `0.04 * bench[i-3] + 0.16 * bench[i-2] + 0.36 * bench[i-1]`.
/// Unavailable before enough lags exist or when any lag is unmapped.
#[derive(Debug, Clone)]
pub struct WeightedMarketReturn {
    config: WeightedMarketReturnConfig,
    weights: Array1<f64>,
}

impl WeightedMarketReturn {
    /// Create a new factor with the default loadings.
    #[must_use]
    pub fn new() -> Self {
        let config = WeightedMarketReturnConfig::default();
        let weights = config.weights.to_array();
        Self { config, weights }
    }
}

impl Default for WeightedMarketReturn {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingFactor for WeightedMarketReturn {
    fn name(&self) -> &str {
        "weighted_market_return"
    }

    fn description(&self) -> &str {
        "Declining-lag weighted blend of preceding benchmark excess returns"
    }

    fn kind(&self) -> FactorKind {
        FactorKind::MarketTiming
    }

    fn lookback(&self) -> usize {
        self.weights.len()
    }

    fn evaluate(&self, inputs: &FactorInputs<'_>, index: usize) -> Result<f64, FactorError> {
        let lags = self.weights.len();
        inputs.require_history(index, lags)?;

        let lagged = (index - lags..index)
            .map(|j| inputs.benchmark_at(j))
            .collect::<Result<Array1<f64>, _>>()?;

        Ok(weighted_sum(lagged.view(), self.weights.view())?)
    }
}

impl ConfigurableFactor for WeightedMarketReturn {
    type Config = WeightedMarketReturnConfig;

    fn with_config(config: Self::Config) -> Result<Self, FactorError> {
        let raw = config.weights.weights();
        if raw.is_empty() {
            return Err(FactorError::InvalidConfig("at least one lag weight required".to_string()));
        }
        if raw.iter().any(|w| !w.is_finite()) {
            return Err(FactorError::InvalidConfig("lag weights must be finite".to_string()));
        }
        let weights = config.weights.to_array();
        Ok(Self { config, weights })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
