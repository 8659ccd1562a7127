//! Owned fixtures for building `FactorInputs` in tests.

use dynalpha_primitives::Period;
use dynalpha_traits::FactorInputs;

#[derive(Debug)]
pub(crate) struct Fixture {
    pub(crate) periods: Vec<Period>,
    pub(crate) closes: Vec<f64>,
    pub(crate) excess: Vec<Option<f64>>,
    pub(crate) benchmark: Vec<Option<f64>>,
}

impl Fixture {
    /// Consecutive months from 2023-01 with the given closes and benchmark.
    pub(crate) fn new(closes: Vec<f64>, benchmark: Vec<Option<f64>>) -> Self {
        let mut period: Period = "2023-01".parse().unwrap();
        let periods = (0..closes.len())
            .map(|_| {
                let current = period;
                period = period.succ();
                current
            })
            .collect();
        let excess = std::iter::once(None)
            .chain(closes.windows(2).map(|w| Some(w[1] / w[0] - 1.0)))
            .take(closes.len())
            .collect();
        Self { periods, closes, excess, benchmark }
    }

    pub(crate) fn with_excess(mut self, excess: Vec<Option<f64>>) -> Self {
        self.excess = excess;
        self
    }

    pub(crate) fn inputs(&self) -> FactorInputs<'_> {
        FactorInputs::new(&self.periods, &self.closes, &self.excess, &self.benchmark).unwrap()
    }
}
