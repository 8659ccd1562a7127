//! Benchmark alignment.

use std::collections::HashMap;

use dynalpha_primitives::{Period, ReturnSeries};

/// Benchmark excess returns keyed by period.
///
/// Mapping is by exact period match only; a period the benchmark does not
/// cover maps to `None`.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkMapper {
    excess: HashMap<Period, f64>,
}

impl BenchmarkMapper {
    /// Index the benchmark's excess returns.
    #[must_use]
    pub fn new(benchmark: &ReturnSeries) -> Self {
        let excess = benchmark.rows().iter().map(|r| (r.period, r.excess_return)).collect();
        Self { excess }
    }

    /// Benchmark excess return for each period of an instrument axis.
    #[must_use]
    pub fn map(&self, periods: &[Period]) -> Vec<Option<f64>> {
        periods.iter().map(|p| self.excess.get(p).copied()).collect()
    }

    /// Number of periods the benchmark covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excess.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excess.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use dynalpha_primitives::{ReturnRow, Symbol};

    use super::*;

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    fn row(p: &str, excess: f64) -> ReturnRow {
        ReturnRow { period: period(p), simple_return: excess, excess_return: excess }
    }

    #[test]
    fn exact_period_match_only() {
        let bench = ReturnSeries::new(
            Symbol::new("SPY"),
            vec![row("2024-02", 0.01), row("2024-03", 0.02), row("2024-05", 0.04)],
        );
        let mapper = BenchmarkMapper::new(&bench);
        let axis = [period("2024-01"), period("2024-02"), period("2024-04"), period("2024-05")];

        assert_eq!(mapper.map(&axis), vec![None, Some(0.01), None, Some(0.04)]);
        assert_eq!(mapper.len(), 3);
    }

    #[test]
    fn empty_benchmark_maps_nothing() {
        let mapper = BenchmarkMapper::new(&ReturnSeries::empty(Symbol::new("SPY")));
        assert!(mapper.is_empty());
        assert_eq!(mapper.map(&[period("2024-01")]), vec![None]);
    }
}
