//! Rolling sensitivity to the benchmark.

use dynalpha_math::beta;
use dynalpha_traits::{ConfigurableFactor, FactorError, FactorInputs, FactorKind, RollingFactor};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Configuration for the rolling beta factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingBetaConfig {
    /// Number of consecutive periods in each window, including the current one.
    pub window: usize,
    /// Minimum number of paired observations needed inside a window.
    pub min_pairs: usize,
}

impl Default for RollingBetaConfig {
    fn default() -> Self {
        Self { window: 12, min_pairs: 2 }
    }
}

/// Sample covariance of instrument and benchmark excess returns over a
/// trailing window, divided by the benchmark's sample variance.
///
/// The window at index `i` covers `[i - window + 1, i]`. Pairs whose
/// instrument excess return is absent are skipped; a present instrument
/// value whose benchmark counterpart is unmapped makes the whole window
/// unavailable.
#[derive(Debug, Clone)]
pub struct RollingBeta {
    config: RollingBetaConfig,
}

impl RollingBeta {
    /// Create a new factor with the default 12-period window.
    #[must_use]
    pub fn new() -> Self {
        Self { config: RollingBetaConfig::default() }
    }

    fn pairs(
        &self,
        inputs: &FactorInputs<'_>,
        index: usize,
    ) -> Result<(Vec<f64>, Vec<f64>), FactorError> {
        let start = index + 1 - self.config.window;
        let mut asset = Vec::with_capacity(self.config.window);
        let mut market = Vec::with_capacity(self.config.window);

        for j in start..=index {
            let Some(excess) = inputs.excess()[j] else { continue };
            market.push(inputs.benchmark_at(j)?);
            asset.push(excess);
        }
        Ok((asset, market))
    }
}

impl Default for RollingBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingFactor for RollingBeta {
    fn name(&self) -> &str {
        "twelve_month_beta"
    }

    fn description(&self) -> &str {
        "Covariance with benchmark excess returns over benchmark variance"
    }

    fn kind(&self) -> FactorKind {
        FactorKind::Risk
    }

    fn lookback(&self) -> usize {
        self.config.window - 1
    }

    fn evaluate(&self, inputs: &FactorInputs<'_>, index: usize) -> Result<f64, FactorError> {
        inputs.require_history(index, self.lookback())?;

        let (asset, market) = self.pairs(inputs, index)?;
        if asset.len() < self.config.min_pairs {
            return Err(FactorError::InsufficientHistory {
                required: self.config.min_pairs,
                actual: asset.len(),
            });
        }

        let asset = Array1::from(asset);
        let market = Array1::from(market);
        Ok(beta(asset.view(), market.view())?)
    }
}

impl ConfigurableFactor for RollingBeta {
    type Config = RollingBetaConfig;

    fn with_config(config: Self::Config) -> Result<Self, FactorError> {
        if config.window < 2 {
            return Err(FactorError::InvalidConfig("beta window must be at least 2".to_string()));
        }
        if config.min_pairs < 2 || config.min_pairs > config.window {
            return Err(FactorError::InvalidConfig(format!(
                "min_pairs must be in [2, {}], got {}",
                config.window, config.min_pairs
            )));
        }
        Ok(Self { config })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
