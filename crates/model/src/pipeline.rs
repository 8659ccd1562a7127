//! End-to-end DAM pipeline.

use dynalpha_factors::{RollingBeta, ThreeMonthReturn, WeightedMarketReturn};
use dynalpha_primitives::{
    FactorRow, Instrument, InstrumentFactors, InstrumentScore, SectorRanking, Symbol, TimeSeries,
};
use dynalpha_traits::{ConfigurableFactor, FactorInputs, RollingFactor};
use dynalpha_utils::rank_sectors;
use rayon::prelude::*;

use crate::{BenchmarkMapper, ModelConfig, ModelError, PriceStore, ReturnEngine, Scorer, SkipReason};

/// An instrument that did not reach the sector ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedInstrument {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Everything a pipeline run produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Factor tables for every instrument with a usable price series, in
    /// input order.
    pub tables: Vec<InstrumentFactors>,
    /// Mean scores of instruments with a resolved sector, in input order.
    pub scores: Vec<InstrumentScore>,
    /// Best instruments per sector, sectors in lexicographic order.
    pub rankings: Vec<SectorRanking>,
    /// Instruments dropped along the way, in input order.
    pub skipped: Vec<SkippedInstrument>,
}

impl PipelineOutput {
    /// Factor table for a symbol.
    #[must_use]
    pub fn table(&self, symbol: &Symbol) -> Option<&InstrumentFactors> {
        self.tables.iter().find(|t| t.symbol() == symbol)
    }

    /// Ranking for a sector.
    #[must_use]
    pub fn ranking(&self, sector: &str) -> Option<&SectorRanking> {
        self.rankings.iter().find(|r| r.sector == sector)
    }
}

/// The dynamic alpha model: returns, factors, scores and sector ranking.
#[derive(Debug, Clone)]
pub struct DamPipeline {
    config: ModelConfig,
    engine: ReturnEngine,
    momentum: ThreeMonthReturn,
    market: WeightedMarketReturn,
    beta: RollingBeta,
    scorer: Scorer,
}

impl DamPipeline {
    /// Create a pipeline with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = ModelConfig::default();
        Self {
            engine: ReturnEngine::new(config.risk_free_rate_annual),
            momentum: ThreeMonthReturn::new(),
            market: WeightedMarketReturn::new(),
            beta: RollingBeta::new(),
            scorer: Scorer::new(config.scoring),
            config,
        }
    }

    /// Create a pipeline with a custom configuration.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` if the configuration fails
    /// validation.
    pub fn with_config(config: ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self {
            engine: ReturnEngine::new(config.risk_free_rate_annual),
            momentum: ThreeMonthReturn::with_config(config.return_config())?,
            market: WeightedMarketReturn::with_config(config.market_config())?,
            beta: RollingBeta::with_config(config.beta_config())?,
            scorer: Scorer::new(config.scoring),
            config,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Return engine used for instruments and the benchmark.
    #[must_use]
    pub const fn engine(&self) -> &ReturnEngine {
        &self.engine
    }

    /// Build the scored factor table for one instrument.
    ///
    /// # Errors
    /// Returns `ModelError::Factor` if the aligned inputs disagree in length.
    pub fn factor_table(
        &self,
        instrument: Instrument,
        series: &TimeSeries,
        benchmark: &BenchmarkMapper,
    ) -> Result<InstrumentFactors, ModelError> {
        let periods = series.periods();
        let closes = series.closes();
        let mut excess = self.engine.compute(series).aligned_excess();
        excess.resize(periods.len(), None);
        let mapped = benchmark.map(&periods);

        tracing::debug!(
            symbol = %instrument.symbol,
            observations = periods.len(),
            unmapped = mapped.iter().filter(|v| v.is_none()).count(),
            "computing factors"
        );

        let inputs = FactorInputs::new(&periods, &closes, &excess, &mapped)?;
        let three_month = self.momentum.compute(&inputs);
        let weighted = self.market.compute(&inputs);
        let beta = self.beta.compute(&inputs);

        let rows = periods
            .iter()
            .enumerate()
            .map(|(i, &period)| FactorRow {
                period,
                three_month_return: three_month[i],
                weighted_market_return: weighted[i],
                twelve_month_beta: beta[i],
                dam_score: None,
            })
            .collect();

        let mut table = InstrumentFactors::new(instrument, rows);
        self.scorer.score_table(&mut table);
        Ok(table)
    }

    /// Run the model over a universe of instruments.
    ///
    /// The benchmark's series is read from the same store. An empty or
    /// missing benchmark leaves every period unmapped; it does not fail the
    /// run. Instruments are processed independently and the output keeps
    /// input order whether or not the run is parallel.
    #[must_use]
    pub fn run(
        &self,
        store: &PriceStore,
        benchmark: &Symbol,
        instruments: &[Instrument],
    ) -> PipelineOutput {
        let mapper = match store.series(benchmark) {
            Ok(series) => BenchmarkMapper::new(&self.engine.compute(&series)),
            Err(err) => {
                tracing::warn!(benchmark = %benchmark, error = %err, "benchmark unavailable");
                BenchmarkMapper::default()
            }
        };

        let build = |instrument: &Instrument| -> Result<InstrumentFactors, ModelError> {
            let series = store.series(&instrument.symbol)?;
            self.factor_table(instrument.clone(), &series, &mapper)
        };
        let results: Vec<Result<InstrumentFactors, ModelError>> = if self.config.parallel {
            instruments.par_iter().map(build).collect()
        } else {
            instruments.iter().map(build).collect()
        };

        let mut output = PipelineOutput::default();
        for (instrument, result) in instruments.iter().zip(results) {
            let table = match result {
                Ok(table) => table,
                Err(err) => {
                    tracing::warn!(symbol = %instrument.symbol, error = %err, "instrument skipped");
                    output.skip(instrument, SkipReason::from(err));
                    continue;
                }
            };

            match self.scorer.aggregate(&table) {
                Ok(score) => output.scores.push(score),
                Err(reason) => {
                    tracing::warn!(symbol = %instrument.symbol, %reason, "instrument not ranked");
                    output.skip(instrument, reason);
                }
            }
            output.tables.push(table);
        }

        output.rankings = rank_sectors(&output.scores, self.config.top_n);

        tracing::info!(
            instruments = instruments.len(),
            scored = output.scores.len(),
            skipped = output.skipped.len(),
            sectors = output.rankings.len(),
            "dam run complete"
        );
        output
    }
}

impl PipelineOutput {
    fn skip(&mut self, instrument: &Instrument, reason: SkipReason) {
        self.skipped.push(SkippedInstrument { symbol: instrument.symbol.clone(), reason });
    }
}

impl Default for DamPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynalpha_primitives::{Observation, Period, SectorLabel};

    use super::*;
    use crate::ScoringPolicy;

    fn months(n: usize) -> Vec<Period> {
        let mut period: Period = "2023-01".parse().unwrap();
        (0..n)
            .map(|_| {
                let current = period;
                period = period.succ();
                current
            })
            .collect()
    }

    fn load(store: &mut PriceStore, symbol: &str, closes: &[f64]) {
        let observations =
            months(closes.len()).into_iter().zip(closes).map(|(p, &c)| Observation::new(p, c));
        store.extend(Symbol::new(symbol), observations);
    }

    fn tech(symbol: &str) -> Instrument {
        Instrument::new(Symbol::new(symbol), SectorLabel::parse(Some("Technology")))
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ModelConfig { top_n: 0, ..Default::default() };
        assert!(DamPipeline::with_config(config).is_err());
    }

    #[test]
    fn factor_rows_follow_instrument_axis() {
        let mut store = PriceStore::new();
        load(&mut store, "SPY", &[100.0, 101.0, 99.0, 102.0, 104.0, 103.0]);
        load(&mut store, "AAA", &[10.0, 11.0, 12.0, 13.0, 14.0]);

        let output = DamPipeline::new().run(&store, &Symbol::new("SPY"), &[tech("AAA")]);
        let table = output.table(&Symbol::new("AAA")).unwrap();

        assert_eq!(table.len(), 5);
        assert!(table.rows[..3].iter().all(|r| r.three_month_return.is_none()));
        assert_relative_eq!(table.rows[3].three_month_return.unwrap(), 0.3, epsilon = 1e-12);
        assert!(table.rows.iter().all(|r| r.twelve_month_beta.is_none()));
    }

    #[test]
    fn empty_series_and_unresolved_sector_skipped() {
        let mut store = PriceStore::new();
        load(&mut store, "SPY", &[100.0, 101.0, 102.0, 103.0]);
        load(&mut store, "AAA", &[10.0, 11.0, 12.0, 13.0]);
        load(&mut store, "DEAD", &[f64::NAN, -1.0]);

        let universe =
            [tech("DEAD"), Instrument::unclassified(Symbol::new("AAA")), tech("GONE")];
        let output = DamPipeline::new().run(&store, &Symbol::new("SPY"), &universe);

        let reasons: Vec<(&str, &SkipReason)> =
            output.skipped.iter().map(|s| (s.symbol.as_str(), &s.reason)).collect();
        assert_eq!(
            reasons,
            [
                ("DEAD", &SkipReason::EmptySeries),
                ("AAA", &SkipReason::SectorUnresolved),
                ("GONE", &SkipReason::EmptySeries),
            ]
        );
        assert_eq!(output.tables.len(), 1);
        assert!(output.scores.is_empty());
        assert!(output.rankings.is_empty());
    }

    #[test]
    fn missing_benchmark_is_not_fatal() {
        let mut store = PriceStore::new();
        load(&mut store, "AAA", &[10.0, 11.0, 12.0, 13.0, 14.0]);

        let output = DamPipeline::new().run(&store, &Symbol::new("SPY"), &[tech("AAA")]);
        let table = output.table(&Symbol::new("AAA")).unwrap();

        assert!(table.rows.iter().all(|r| r.weighted_market_return.is_none()));
        assert!(table.rows.iter().all(|r| r.dam_score == Some(0.0)));
        assert_eq!(output.ranking("Technology").unwrap().top().symbol.as_str(), "AAA");
    }

    #[test]
    fn propagate_policy_skips_unscored() {
        let mut store = PriceStore::new();
        load(&mut store, "SPY", &[100.0, 101.0, 102.0, 103.0, 104.0]);
        load(&mut store, "AAA", &[10.0, 11.0, 12.0, 13.0, 14.0]);

        let config =
            ModelConfig { scoring: ScoringPolicy::PropagateUnavailable, ..Default::default() };
        let output = DamPipeline::with_config(config).unwrap().run(
            &store,
            &Symbol::new("SPY"),
            &[tech("AAA")],
        );

        assert_eq!(output.skipped[0].reason, SkipReason::NoScore);
        let table = output.table(&Symbol::new("AAA")).unwrap();
        assert!(table.rows.iter().all(|r| r.dam_score.is_none()));
    }
}
