//! Return type definitions.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{Period, Symbol};

/// Return over one period, measured from the prior observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRow {
    /// Period the return ends in.
    pub period: Period,
    /// `close[i] / close[i-1] - 1`.
    pub simple_return: f64,
    /// Simple return less the monthly risk-free rate.
    pub excess_return: f64,
}

/// Returns for one instrument, one row per observation after the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    symbol: Symbol,
    rows: Vec<ReturnRow>,
}

impl ReturnSeries {
    /// Create new return series.
    #[must_use]
    pub const fn new(symbol: Symbol, rows: Vec<ReturnRow>) -> Self {
        Self { symbol, rows }
    }

    /// An empty series for `symbol`.
    #[must_use]
    pub const fn empty(symbol: Symbol) -> Self {
        Self { symbol, rows: Vec::new() }
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Number of return rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in period order.
    #[must_use]
    pub fn rows(&self) -> &[ReturnRow] {
        &self.rows
    }

    /// Row ending in a specific period.
    #[must_use]
    pub fn get(&self, period: Period) -> Option<&ReturnRow> {
        self.rows.binary_search_by(|r| r.period.cmp(&period)).ok().map(|i| &self.rows[i])
    }

    /// Simple returns as an ndarray.
    #[must_use]
    pub fn simple_returns(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.simple_return).collect()
    }

    /// Excess returns as an ndarray.
    #[must_use]
    pub fn excess_returns(&self) -> Array1<f64> {
        self.rows.iter().map(|r| r.excess_return).collect()
    }

    /// Excess returns laid out on the source series' index axis.
    ///
    /// Index 0 has no prior close and is `None`; index `i` holds the return
    /// of row `i - 1`. Only meaningful when the rows were derived from the
    /// complete source series.
    #[must_use]
    pub fn aligned_excess(&self) -> Vec<Option<f64>> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        std::iter::once(None).chain(self.rows.iter().map(|r| Some(r.excess_return))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: &str, simple: f64) -> ReturnRow {
        ReturnRow { period: period.parse().unwrap(), simple_return: simple, excess_return: simple }
    }

    #[test]
    fn return_series_get() {
        let series = ReturnSeries::new(
            Symbol::new("AAPL"),
            vec![row("2024-02", 0.01), row("2024-03", 0.02)],
        );

        assert_eq!(series.get("2024-03".parse().unwrap()).map(|r| r.simple_return), Some(0.02));
        assert!(series.get("2024-01".parse().unwrap()).is_none());
    }

    #[test]
    fn aligned_excess_prepends_gap() {
        let series =
            ReturnSeries::new(Symbol::new("A"), vec![row("2024-02", 0.01), row("2024-03", -0.02)]);

        assert_eq!(series.aligned_excess(), vec![None, Some(0.01), Some(-0.02)]);
        assert_eq!(series.simple_returns().len(), 2);
    }

    #[test]
    fn empty_series() {
        let series = ReturnSeries::empty(Symbol::new("A"));
        assert!(series.is_empty());
        assert!(series.aligned_excess().is_empty());
    }
}
