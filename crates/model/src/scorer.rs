//! Combining factors into DAM scores.

use dynalpha_primitives::{InstrumentFactors, InstrumentScore};

use crate::{ScoringPolicy, SkipReason};

/// Combines factor values into per-period and per-instrument scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    policy: ScoringPolicy,
}

impl Scorer {
    /// Create a scorer with the given policy.
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Active policy.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// DAM score for one period: the sum of the three factor values.
    ///
    /// Under [`ScoringPolicy::ZeroFillIncomplete`] the score is `0` whenever
    /// either return factor is missing, and a missing beta counts as `0`.
    /// Under [`ScoringPolicy::PropagateUnavailable`] the score is `None`
    /// unless all three are present.
    #[must_use]
    pub fn score(
        &self,
        three_month_return: Option<f64>,
        weighted_market_return: Option<f64>,
        twelve_month_beta: Option<f64>,
    ) -> Option<f64> {
        match self.policy {
            ScoringPolicy::ZeroFillIncomplete => {
                let score = match (three_month_return, weighted_market_return) {
                    (Some(r), Some(m)) => r + m + twelve_month_beta.unwrap_or(0.0),
                    _ => 0.0,
                };
                Some(score)
            }
            ScoringPolicy::PropagateUnavailable => {
                Some(three_month_return? + weighted_market_return? + twelve_month_beta?)
            }
        }
    }

    /// Fill the `dam_score` of every row in a factor table.
    pub fn score_table(&self, table: &mut InstrumentFactors) {
        for row in &mut table.rows {
            row.dam_score = self.score(
                row.three_month_return,
                row.weighted_market_return,
                row.twelve_month_beta,
            );
        }
    }

    /// Aggregate a scored table into the instrument's mean score.
    ///
    /// # Errors
    /// Returns [`SkipReason::SectorUnresolved`] when the instrument has no
    /// sector and [`SkipReason::NoScore`] when no row carries a score.
    pub fn aggregate(&self, table: &InstrumentFactors) -> Result<InstrumentScore, SkipReason> {
        let sector = table.instrument.sector.as_resolved().ok_or(SkipReason::SectorUnresolved)?;
        let mean = table.mean_dam_score().ok_or(SkipReason::NoScore)?;
        Ok(InstrumentScore::new(table.symbol().clone(), sector, mean))
    }
}
