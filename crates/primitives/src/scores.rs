//! Factor and score type definitions.

use serde::{Deserialize, Serialize};

use crate::{Instrument, Period, Symbol};

/// Factor values for one instrument in one period.
///
/// Every field is `None` until enough history exists to compute it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    /// Period of the row.
    pub period: Period,
    /// Trailing return over the return window.
    pub three_month_return: Option<f64>,
    /// Lag-weighted benchmark excess return.
    pub weighted_market_return: Option<f64>,
    /// Trailing beta to the benchmark.
    pub twelve_month_beta: Option<f64>,
    /// Combined score.
    pub dam_score: Option<f64>,
}

impl FactorRow {
    /// A row with no factor values.
    #[must_use]
    pub const fn empty(period: Period) -> Self {
        Self {
            period,
            three_month_return: None,
            weighted_market_return: None,
            twelve_month_beta: None,
            dam_score: None,
        }
    }
}

/// Factor table for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentFactors {
    /// The instrument.
    pub instrument: Instrument,
    /// One row per observation, oldest first.
    pub rows: Vec<FactorRow>,
}

impl InstrumentFactors {
    /// Create a new factor table.
    #[must_use]
    pub const fn new(instrument: Instrument, rows: Vec<FactorRow>) -> Self {
        Self { instrument, rows }
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.instrument.symbol
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a specific period.
    #[must_use]
    pub fn row(&self, period: Period) -> Option<&FactorRow> {
        self.rows.iter().find(|r| r.period == period)
    }

    /// Arithmetic mean of the present DAM scores.
    ///
    /// Zero-filled scores are present and count toward the mean. Returns
    /// `None` when no row carries a score.
    #[must_use]
    pub fn mean_dam_score(&self) -> Option<f64> {
        let (sum, count) = self
            .rows
            .iter()
            .filter_map(|r| r.dam_score)
            .fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));

        (count > 0).then(|| sum / count as f64)
    }
}

/// Aggregate score of an instrument with a resolved sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentScore {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Sector name.
    pub sector: String,
    /// Mean DAM score across all periods.
    pub mean_dam_score: f64,
}

impl InstrumentScore {
    /// Create a new instrument score.
    #[must_use]
    pub fn new(symbol: Symbol, sector: impl Into<String>, mean_dam_score: f64) -> Self {
        Self { symbol, sector: sector.into(), mean_dam_score }
    }
}

/// Best-scoring instruments of one sector, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRanking {
    /// Sector name.
    pub sector: String,
    ranked: Vec<InstrumentScore>,
}

impl SectorRanking {
    /// Create a ranking from scores already ordered best first.
    ///
    /// Returns `None` when `ranked` is empty.
    #[must_use]
    pub fn new(sector: impl Into<String>, ranked: Vec<InstrumentScore>) -> Option<Self> {
        if ranked.is_empty() {
            return None;
        }
        Some(Self { sector: sector.into(), ranked })
    }

    /// Highest-scoring instrument.
    #[must_use]
    pub fn top(&self) -> &InstrumentScore {
        &self.ranked[0]
    }

    /// Second-highest instrument, if the sector has one.
    #[must_use]
    pub fn second(&self) -> Option<&InstrumentScore> {
        self.ranked.get(1)
    }

    /// All ranked members, best first.
    #[must_use]
    pub fn members(&self) -> &[InstrumentScore] {
        &self.ranked
    }
}
