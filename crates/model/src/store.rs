//! In-memory store of raw monthly closes.

use std::collections::HashMap;

use dynalpha_primitives::{Observation, Period, Symbol, TimeSeries};

use crate::ModelError;

/// Raw closing prices per symbol, as delivered by the data source.
///
/// Observations are kept as received; [`PriceStore::series`] drops unusable
/// closes, resolves duplicate periods (last write wins) and sorts.
#[derive(Debug, Clone, Default)]
pub struct PriceStore {
    raw: HashMap<Symbol, Vec<Observation>>,
    order: Vec<Symbol>,
}

impl PriceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation for a symbol.
    pub fn insert(&mut self, symbol: Symbol, observation: Observation) {
        self.entry(symbol).push(observation);
    }

    /// Add many observations for a symbol.
    pub fn extend(&mut self, symbol: Symbol, observations: impl IntoIterator<Item = Observation>) {
        self.entry(symbol).extend(observations);
    }

    fn entry(&mut self, symbol: Symbol) -> &mut Vec<Observation> {
        if !self.raw.contains_key(&symbol) {
            self.order.push(symbol.clone());
        }
        self.raw.entry(symbol).or_default()
    }

    /// Cleaned, ordered series for a symbol.
    ///
    /// # Errors
    /// Returns `ModelError::EmptySeries` if the symbol is unknown or has no
    /// usable observations.
    pub fn series(&self, symbol: &Symbol) -> Result<TimeSeries, ModelError> {
        let raw = self.raw.get(symbol).map(Vec::as_slice).unwrap_or_default();
        let series = TimeSeries::from_observations(symbol.clone(), raw.iter().copied());
        if series.is_empty() {
            return Err(ModelError::EmptySeries(symbol.clone()));
        }
        Ok(series)
    }

    /// Number of usable observations for a symbol after cleaning.
    #[must_use]
    pub fn length(&self, symbol: &Symbol) -> usize {
        self.series(symbol).map_or(0, |s| s.len())
    }

    /// Symbols in first-insertion order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.order
    }

    /// Most recent usable period for a symbol.
    #[must_use]
    pub fn latest_period(&self, symbol: &Symbol) -> Option<Period> {
        self.raw
            .get(symbol)?
            .iter()
            .filter(|obs| obs.is_usable())
            .map(|obs| obs.period)
            .max()
    }

    /// Number of symbols held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<(Symbol, Observation)> for PriceStore {
    fn from_iter<I: IntoIterator<Item = (Symbol, Observation)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (symbol, observation) in iter {
            store.insert(symbol, observation);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn obs(period: &str, close: f64) -> Observation {
        Observation::new(period.parse().unwrap(), close)
    }

    #[test]
    fn series_sorts_and_deduplicates() {
        let mut store = PriceStore::new();
        let spy = Symbol::new("SPY");
        store.extend(
            spy.clone(),
            [obs("2024-03", 3.0), obs("2024-01", 1.0), obs("2024-02", 2.0), obs("2024-01", 1.5)],
        );

        let series = store.series(&spy).unwrap();
        assert_eq!(store.length(&spy), 3);
        assert_eq!(series.periods()[0], "2024-01".parse().unwrap());
        assert_relative_eq!(series.closes()[0], 1.5);
        assert_eq!(store.latest_period(&spy), Some("2024-03".parse().unwrap()));
    }

    #[test]
    fn unusable_closes_leave_empty_series() {
        let mut store = PriceStore::new();
        let bad = Symbol::new("BAD");
        store.extend(bad.clone(), [obs("2024-01", f64::NAN), obs("2024-02", 0.0)]);

        assert_eq!(store.series(&bad), Err(ModelError::EmptySeries(bad.clone())));
        assert_eq!(store.length(&bad), 0);
        assert_eq!(store.latest_period(&bad), None);
    }

    #[test]
    fn unknown_symbol_is_empty_series() {
        let store = PriceStore::new();
        let missing = Symbol::new("NOPE");
        assert_eq!(store.series(&missing), Err(ModelError::EmptySeries(missing)));
    }

    #[test]
    fn symbols_keep_insertion_order() {
        let store: PriceStore = [
            (Symbol::new("MSFT"), obs("2024-01", 1.0)),
            (Symbol::new("AAPL"), obs("2024-01", 1.0)),
            (Symbol::new("MSFT"), obs("2024-02", 1.0)),
        ]
        .into_iter()
        .collect();

        let symbols: Vec<&str> = store.symbols().iter().map(Symbol::as_str).collect();
        assert_eq!(symbols, ["MSFT", "AAPL"]);
        assert_eq!(store.len(), 2);
    }
}
