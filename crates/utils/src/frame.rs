//! Conversions between model outputs and polars DataFrames.

use dynalpha_primitives::{InstrumentFactors, Observation, Period, SectorRanking, Symbol};
use polars::prelude::*;

use crate::UtilsError;

/// Flatten factor tables into one row per (instrument, period).
///
/// Columns: `symbol, sector, period, three_month_return,
/// weighted_market_return, twelve_month_beta, dam_score`. Unavailable
/// factor values are null; periods are `YYYY-MM` strings.
///
/// # Errors
/// Returns `UtilsError::Polars` if the frame cannot be assembled.
pub fn factors_frame(tables: &[InstrumentFactors]) -> Result<DataFrame, UtilsError> {
    let height = tables.iter().map(InstrumentFactors::len).sum();
    let mut symbols = Vec::with_capacity(height);
    let mut sectors = Vec::with_capacity(height);
    let mut periods = Vec::with_capacity(height);
    let mut three_month = Vec::with_capacity(height);
    let mut weighted = Vec::with_capacity(height);
    let mut beta = Vec::with_capacity(height);
    let mut dam = Vec::with_capacity(height);

    for table in tables {
        let sector = table.instrument.sector.to_string();
        for row in &table.rows {
            symbols.push(table.symbol().to_string());
            sectors.push(sector.clone());
            periods.push(row.period.to_string());
            three_month.push(row.three_month_return);
            weighted.push(row.weighted_market_return);
            beta.push(row.twelve_month_beta);
            dam.push(row.dam_score);
        }
    }

    let df = DataFrame::new(vec![
        Column::new("symbol".into(), symbols),
        Column::new("sector".into(), sectors),
        Column::new("period".into(), periods),
        Column::new("three_month_return".into(), three_month),
        Column::new("weighted_market_return".into(), weighted),
        Column::new("twelve_month_beta".into(), beta),
        Column::new("dam_score".into(), dam),
    ])?;
    Ok(df)
}

/// Flatten sector rankings into one row per ranked member.
///
/// Columns: `sector, rank, symbol, mean_dam_score`, with `rank` starting
/// at 1 inside each sector.
///
/// # Errors
/// Returns `UtilsError::Polars` if the frame cannot be assembled.
pub fn rankings_frame(rankings: &[SectorRanking]) -> Result<DataFrame, UtilsError> {
    let mut sectors = Vec::new();
    let mut ranks: Vec<u32> = Vec::new();
    let mut symbols = Vec::new();
    let mut scores = Vec::new();

    for ranking in rankings {
        for (rank, member) in (1..).zip(ranking.members()) {
            sectors.push(ranking.sector.clone());
            ranks.push(rank);
            symbols.push(member.symbol.to_string());
            scores.push(member.mean_dam_score);
        }
    }

    let df = DataFrame::new(vec![
        Column::new("sector".into(), sectors),
        Column::new("rank".into(), ranks),
        Column::new("symbol".into(), symbols),
        Column::new("mean_dam_score".into(), scores),
    ])?;
    Ok(df)
}

/// Read `symbol, date, close` rows into per-symbol observations.
///
/// `date` may be a polars `Date` column or strings in `YYYY-MM-DD` or
/// `YYYY-MM` form; only the month is kept. Rows with a null close are
/// skipped. Rows are returned in frame order.
///
/// # Errors
/// Returns `UtilsError::Polars` for missing or mistyped columns,
/// `UtilsError::NullValue` for a null symbol or date, and
/// `UtilsError::Period` for an unparseable date.
pub fn observations_from_frame(df: &DataFrame) -> Result<Vec<(Symbol, Observation)>, UtilsError> {
    let symbols = df.column("symbol")?.str()?;
    let dates = df.column("date")?.cast(&DataType::String)?;
    let dates = dates.str()?;
    let closes = df.column("close")?.cast(&DataType::Float64)?;
    let closes = closes.f64()?;

    let mut out = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let Some(close) = closes.get(row) else { continue };
        let symbol = symbols.get(row).ok_or(UtilsError::NullValue { column: "symbol", row })?;
        let date = dates.get(row).ok_or(UtilsError::NullValue { column: "date", row })?;
        let period: Period =
            date.parse().map_err(|source| UtilsError::Period { row, source })?;

        out.push((Symbol::new(symbol), Observation::new(period, close)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynalpha_primitives::{FactorRow, Instrument, InstrumentScore, SectorLabel};

    use super::*;

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    #[test]
    fn factors_frame_layout() {
        let mut row = FactorRow::empty(period("2024-04"));
        row.three_month_return = Some(0.03);
        row.dam_score = Some(0.0);
        let tables = vec![
            InstrumentFactors::new(
                Instrument::new(Symbol::new("AAPL"), SectorLabel::parse(Some("Technology"))),
                vec![FactorRow::empty(period("2024-03")), row],
            ),
            InstrumentFactors::new(Instrument::unclassified(Symbol::new("ZZZ")), Vec::new()),
        ];

        let df = factors_frame(&tables).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 7);
        let periods = df.column("period").unwrap().str().unwrap();
        assert_eq!(periods.get(0), Some("2024-03"));
        assert_eq!(periods.get(1), Some("2024-04"));
        let returns = df.column("three_month_return").unwrap().f64().unwrap();
        assert_eq!(returns.get(0), None);
        assert_eq!(returns.get(1), Some(0.03));
        assert_eq!(df.column("twelve_month_beta").unwrap().null_count(), 2);
    }

    #[test]
    fn rankings_frame_numbers_ranks_per_sector() {
        let rankings = vec![
            SectorRanking::new(
                "Alpha",
                vec![
                    InstrumentScore::new(Symbol::new("HIGH"), "Alpha", 0.10),
                    InstrumentScore::new(Symbol::new("LOW"), "Alpha", 0.07),
                ],
            )
            .unwrap(),
            SectorRanking::new("Beta", vec![InstrumentScore::new(Symbol::new("SOLO"), "Beta", 0.2)])
                .unwrap(),
        ];

        let df = rankings_frame(&rankings).unwrap();
        let ranks: Vec<Option<u32>> =
            df.column("rank").unwrap().u32().unwrap().into_iter().collect();

        assert_eq!(ranks, vec![Some(1), Some(2), Some(1)]);
        let scores = df.column("mean_dam_score").unwrap().f64().unwrap();
        assert_relative_eq!(scores.get(1).unwrap(), 0.07);
    }

    #[test]
    fn observations_from_string_dates() {
        let df = DataFrame::new(vec![
            Column::new("symbol".into(), ["SPY", "SPY", "AAPL"]),
            Column::new("date".into(), ["2024-01-31", "2024-02", "2024-01-02"]),
            Column::new("close".into(), [Some(470.0), None, Some(185.5)]),
        ])
        .unwrap();

        let observations = observations_from_frame(&df).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].0.as_str(), "SPY");
        assert_eq!(observations[0].1.period, period("2024-01"));
        assert_eq!(observations[1].0.as_str(), "AAPL");
        assert_relative_eq!(observations[1].1.close, 185.5);
    }

    #[test]
    fn observations_reject_bad_date() {
        let df = DataFrame::new(vec![
            Column::new("symbol".into(), ["SPY"]),
            Column::new("date".into(), ["January"]),
            Column::new("close".into(), [1.0]),
        ])
        .unwrap();

        assert!(matches!(observations_from_frame(&df), Err(UtilsError::Period { row: 0, .. })));
    }

    #[test]
    fn observations_missing_column() {
        let df = DataFrame::new(vec![Column::new("symbol".into(), ["SPY"])]).unwrap();
        assert!(matches!(observations_from_frame(&df), Err(UtilsError::Polars(_))));
    }
}
