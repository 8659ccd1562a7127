//! Monthly price series.

use std::collections::BTreeMap;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{Period, Symbol};

/// A single monthly closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Month of the observation.
    pub period: Period,
    /// Closing price.
    pub close: f64,
}

impl Observation {
    /// Create a new observation.
    #[must_use]
    pub const fn new(period: Period, close: f64) -> Self {
        Self { period, close }
    }

    /// Whether the close can be used in return computations.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// Ordered closing prices for one instrument.
///
/// Periods are strictly increasing. Gaps (missing months) are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    symbol: Symbol,
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Build a series from raw observations.
    ///
    /// Unusable closes are dropped, duplicate periods keep the last value
    /// seen, and the result is sorted by period.
    #[must_use]
    pub fn from_observations(
        symbol: Symbol,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        let by_period: BTreeMap<Period, f64> = observations
            .into_iter()
            .filter(Observation::is_usable)
            .map(|obs| (obs.period, obs.close))
            .collect();

        let observations = by_period.into_iter().map(|(p, c)| Observation::new(p, c)).collect();
        Self { symbol, observations }
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in period order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Period axis, oldest first.
    #[must_use]
    pub fn periods(&self) -> Vec<Period> {
        self.observations.iter().map(|o| o.period).collect()
    }

    /// Closing prices, oldest first.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    /// Closing prices as an ndarray.
    #[must_use]
    pub fn close_array(&self) -> Array1<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    /// Close for a specific period.
    #[must_use]
    pub fn get(&self, period: Period) -> Option<f64> {
        self.observations
            .binary_search_by(|o| o.period.cmp(&period))
            .ok()
            .map(|i| self.observations[i].close)
    }

    /// Most recent period, if any.
    #[must_use]
    pub fn latest_period(&self) -> Option<Period> {
        self.observations.last().map(|o| o.period)
    }
}
