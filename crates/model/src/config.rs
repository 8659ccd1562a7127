//! Model configuration.

use dynalpha_factors::{RollingBetaConfig, ThreeMonthReturnConfig, WeightedMarketReturnConfig};
use dynalpha_primitives::LagWeights;
use dynalpha_utils::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// How the scorer treats periods where a factor is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Score is zero unless both return factors are present; a missing beta
    /// counts as zero.
    #[default]
    ZeroFillIncomplete,
    /// Score is present only when all three factors are present.
    PropagateUnavailable,
}

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Annual risk-free rate, spread evenly over twelve months.
    pub risk_free_rate_annual: f64,
    /// Loadings on the preceding benchmark excess returns, oldest lag first.
    pub weights: LagWeights,
    /// Periods spanned by the trailing return factor.
    pub return_window: usize,
    /// Periods in each beta window, including the current one.
    pub beta_window: usize,
    /// Minimum paired observations inside a beta window.
    pub min_beta_pairs: usize,
    /// Treatment of incomplete factor rows.
    pub scoring: ScoringPolicy,
    /// Instruments kept per sector.
    pub top_n: usize,
    /// Compute instruments on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            risk_free_rate_annual: 0.024,
            weights: LagWeights::default(),
            return_window: 3,
            beta_window: 12,
            min_beta_pairs: 2,
            scoring: ScoringPolicy::default(),
            top_n: DEFAULT_TOP_N,
            parallel: true,
        }
    }
}

impl ModelConfig {
    /// Check the configuration for values the model cannot run with.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |msg: String| Err(ModelError::InvalidConfig(msg));

        if !self.risk_free_rate_annual.is_finite() {
            return invalid(format!("risk_free_rate_annual is {}", self.risk_free_rate_annual));
        }
        if self.return_window == 0 {
            return invalid("return_window must be positive".to_string());
        }
        if self.weights.window() != self.return_window {
            return invalid(format!(
                "{} weights given for a return window of {}",
                self.weights.window(),
                self.return_window
            ));
        }
        if self.weights.weights().iter().any(|w| !w.is_finite()) {
            return invalid("weights must be finite".to_string());
        }
        if self.beta_window < 2 {
            return invalid(format!("beta_window must be at least 2, got {}", self.beta_window));
        }
        if self.min_beta_pairs < 2 || self.min_beta_pairs > self.beta_window {
            return invalid(format!(
                "min_beta_pairs must be in [2, {}], got {}",
                self.beta_window, self.min_beta_pairs
            ));
        }
        if self.top_n == 0 {
            return invalid("top_n must be positive".to_string());
        }
        Ok(())
    }

    /// Risk-free rate per monthly period.
    #[must_use]
    pub fn monthly_risk_free_rate(&self) -> f64 {
        self.risk_free_rate_annual / 12.0
    }

    pub(crate) const fn return_config(&self) -> ThreeMonthReturnConfig {
        ThreeMonthReturnConfig { window: self.return_window }
    }

    pub(crate) fn market_config(&self) -> WeightedMarketReturnConfig {
        WeightedMarketReturnConfig { weights: self.weights.clone() }
    }

    pub(crate) const fn beta_config(&self) -> RollingBetaConfig {
        RollingBetaConfig { window: self.beta_window, min_pairs: self.min_beta_pairs }
    }
}
