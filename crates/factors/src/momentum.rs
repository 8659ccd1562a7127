//! Short-horizon price momentum.

use dynalpha_traits::{ConfigurableFactor, FactorError, FactorInputs, FactorKind, RollingFactor};
use serde::{Deserialize, Serialize};

/// Configuration for the trailing return factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeMonthReturnConfig {
    /// Number of periods to look back.
    pub window: usize,
}

impl Default for ThreeMonthReturnConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

/// Trailing price return over `window` periods.
///
/// `close[i] / close[i - window] - 1`, measured on the instrument's own
/// index axis. Unavailable for the first `window` indices.
#[derive(Debug, Clone)]
pub struct ThreeMonthReturn {
    config: ThreeMonthReturnConfig,
}

impl ThreeMonthReturn {
    /// Create a new factor with the default 3-period window.
    #[must_use]
    pub fn new() -> Self {
        Self { config: ThreeMonthReturnConfig::default() }
    }
}

impl Default for ThreeMonthReturn {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingFactor for ThreeMonthReturn {
    fn name(&self) -> &str {
        "three_month_return"
    }

    fn description(&self) -> &str {
        "Trailing price return over the return window"
    }

    fn kind(&self) -> FactorKind {
        FactorKind::Momentum
    }

    fn lookback(&self) -> usize {
        self.config.window
    }

    fn evaluate(&self, inputs: &FactorInputs<'_>, index: usize) -> Result<f64, FactorError> {
        let window = self.config.window;
        inputs.require_history(index, window)?;

        let closes = inputs.closes();
        Ok(closes[index] / closes[index - window] - 1.0)
    }
}

impl ConfigurableFactor for ThreeMonthReturn {
    type Config = ThreeMonthReturnConfig;

    fn with_config(config: Self::Config) -> Result<Self, FactorError> {
        if config.window == 0 {
            return Err(FactorError::InvalidConfig("return window must be positive".to_string()));
        }
        Ok(Self { config })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;
    use crate::testing::Fixture;

    fn compounding(n: usize, rate: f64) -> Vec<f64> {
        (0..n).map(|i| 100.0 * (1.0 + rate).powi(i as i32)).collect()
    }

    #[test]
    fn three_month_return_metadata() {
        let factor = ThreeMonthReturn::new();
        assert_eq!(factor.name(), "three_month_return");
        assert_eq!(factor.kind(), FactorKind::Momentum);
        assert_eq!(factor.lookback(), 3);
    }

    #[test]
    fn constant_growth_gives_compounded_return() {
        let fixture = Fixture::new(compounding(14, 0.01), vec![None; 14]);
        let values = ThreeMonthReturn::new().compute(&fixture.inputs());

        assert!(values[..3].iter().all(Option::is_none));
        for value in &values[3..] {
            assert_relative_eq!(value.unwrap(), 1.01_f64.powi(3) - 1.0, epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn availability_depends_only_on_index(#[case] len_extra: usize) {
        let closes: Vec<f64> = (1..=3 + len_extra).map(|i| i as f64).collect();
        let n = closes.len();
        let fixture = Fixture::new(closes.clone(), vec![None; n]);
        let values = ThreeMonthReturn::new().compute(&fixture.inputs());

        for (i, value) in values.iter().enumerate() {
            if i < 3 {
                assert!(value.is_none());
            } else {
                assert_eq!(value.unwrap(), closes[i] / closes[i - 3] - 1.0);
            }
        }
    }

    #[test]
    fn early_index_reports_insufficient_history() {
        let fixture = Fixture::new(vec![1.0, 2.0, 3.0, 4.0], vec![None; 4]);
        assert_eq!(
            ThreeMonthReturn::new().evaluate(&fixture.inputs(), 1),
            Err(FactorError::InsufficientHistory { required: 4, actual: 2 })
        );
    }

    #[test]
    fn zero_window_rejected() {
        assert!(ThreeMonthReturn::with_config(ThreeMonthReturnConfig { window: 0 }).is_err());
        let factor = ThreeMonthReturn::with_config(ThreeMonthReturnConfig { window: 1 }).unwrap();
        assert_eq!(factor.config().window, 1);
    }
}
