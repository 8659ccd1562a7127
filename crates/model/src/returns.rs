//! Simple and excess period returns.

use dynalpha_primitives::{ReturnRow, ReturnSeries, TimeSeries};

/// Derives period returns from a price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnEngine {
    monthly_risk_free_rate: f64,
}

impl ReturnEngine {
    /// Create an engine from an annual risk-free rate.
    #[must_use]
    pub fn new(risk_free_rate_annual: f64) -> Self {
        Self { monthly_risk_free_rate: risk_free_rate_annual / 12.0 }
    }

    /// Risk-free rate subtracted from each period return.
    #[must_use]
    pub const fn monthly_risk_free_rate(&self) -> f64 {
        self.monthly_risk_free_rate
    }

    /// One return row per observation after the first.
    ///
    /// Each row carries the later of its two source periods. Series with
    /// fewer than two observations produce an empty result.
    #[must_use]
    pub fn compute(&self, series: &TimeSeries) -> ReturnSeries {
        let rows = series
            .observations()
            .windows(2)
            .map(|pair| {
                let simple_return = pair[1].close / pair[0].close - 1.0;
                ReturnRow {
                    period: pair[1].period,
                    simple_return,
                    excess_return: simple_return - self.monthly_risk_free_rate,
                }
            })
            .collect();

        ReturnSeries::new(series.symbol().clone(), rows)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynalpha_primitives::{Observation, Period, Symbol};
    use rstest::rstest;

    use super::*;

    fn series(closes: &[f64]) -> TimeSeries {
        let mut period: Period = "2023-06".parse().unwrap();
        let observations: Vec<Observation> = closes
            .iter()
            .map(|&close| {
                let obs = Observation::new(period, close);
                period = period.succ();
                obs
            })
            .collect();
        TimeSeries::from_observations(Symbol::new("X"), observations)
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(14)]
    fn row_count_is_length_minus_one(#[case] n: usize) {
        let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        let source = series(&closes);
        let returns = ReturnEngine::new(0.024).compute(&source);

        assert_eq!(returns.len(), n.saturating_sub(1));
        for (row, obs) in returns.rows().iter().zip(&source.observations()[1..]) {
            assert_eq!(row.period, obs.period);
        }
    }

    #[test]
    fn excess_subtracts_monthly_rate() {
        let returns = ReturnEngine::new(0.024).compute(&series(&[100.0, 110.0]));
        let row = returns.rows()[0];

        assert_relative_eq!(row.simple_return, 0.1, epsilon = 1e-12);
        assert_relative_eq!(row.excess_return, 0.098, epsilon = 1e-12);
    }

    #[test]
    fn zero_rate_reproduces_simple_returns() {
        let source = series(&[50.0, 55.0, 49.5, 60.0]);
        let returns = ReturnEngine::new(0.0).compute(&source);

        for row in returns.rows() {
            assert_eq!(row.excess_return, row.simple_return);
        }
    }

    #[test]
    fn gaps_use_previous_observation() {
        let source = TimeSeries::from_observations(
            Symbol::new("X"),
            [
                Observation::new("2024-01".parse().unwrap(), 10.0),
                Observation::new("2024-04".parse().unwrap(), 12.0),
            ],
        );
        let returns = ReturnEngine::new(0.0).compute(&source);

        assert_eq!(returns.len(), 1);
        assert_eq!(returns.rows()[0].period, "2024-04".parse().unwrap());
        assert_relative_eq!(returns.rows()[0].simple_return, 0.2, epsilon = 1e-12);
    }
}
