//! Example: Sector Ranking on Synthetic Prices
//!
//! Builds a small synthetic panel of monthly closes, runs the dynamic alpha
//! model over it and prints each instrument's factor table and the best two
//! instruments per sector. No network access is needed.
//!
//! Run with: `cargo run --example sector_ranking`

use dynalpha::{
    model::{DamPipeline, ModelConfig, PriceStore, ScoringPolicy},
    primitives::{Instrument, Observation, Period, SectorLabel, Symbol},
};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Months of history per symbol, matching the default trailing window.
const MONTHS: usize = 14;

/// Synthetic universe: symbol, sector, monthly drift, market sensitivity.
const UNIVERSE: &[(&str, &str, f64, f64)] = &[
    ("AAPL", "Technology", 0.015, 1.2),
    ("MSFT", "Technology", 0.012, 1.0),
    ("NVDA", "Technology", 0.030, 1.8),
    ("JNJ", "Healthcare", 0.004, 0.6),
    ("UNH", "Healthcare", 0.008, 0.7),
    ("JPM", "Finance", 0.010, 1.1),
    ("XYZ", "unknown", 0.020, 1.0),
];

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (store, instruments) = synthetic_panel()?;
    let benchmark = Symbol::new("SPY");

    for scoring in [ScoringPolicy::ZeroFillIncomplete, ScoringPolicy::PropagateUnavailable] {
        let pipeline = DamPipeline::with_config(ModelConfig { scoring, ..Default::default() })?;
        let output = pipeline.run(&store, &benchmark, &instruments);

        println!("\n=== {scoring:?} ===");
        if scoring == ScoringPolicy::ZeroFillIncomplete {
            if let Some(table) = output.table(&Symbol::new("NVDA")) {
                println!("\nNVDA factor table:");
                println!("{:<8} {:>10} {:>10} {:>10} {:>10}", "period", "3m", "wmr", "beta", "dam");
                for row in &table.rows {
                    println!(
                        "{:<8} {:>10} {:>10} {:>10} {:>10}",
                        row.period.to_string(),
                        fmt(row.three_month_return),
                        fmt(row.weighted_market_return),
                        fmt(row.twelve_month_beta),
                        fmt(row.dam_score),
                    );
                }
            }
        }

        println!("\nTop {} per sector:", pipeline.config().top_n);
        for ranking in &output.rankings {
            let second = ranking.second().map_or_else(
                || "-".to_string(),
                |s| format!("{} ({:.4})", s.symbol, s.mean_dam_score),
            );
            println!(
                "  {:<12} {} ({:.4}), {}",
                ranking.sector,
                ranking.top().symbol,
                ranking.top().mean_dam_score,
                second
            );
        }
        for skipped in &output.skipped {
            println!("  skipped {}: {}", skipped.symbol, skipped.reason);
        }
    }

    Ok(())
}

fn fmt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

/// Benchmark with a deterministic cycle plus one instrument per universe
/// entry loading on it.
fn synthetic_panel() -> Result<(PriceStore, Vec<Instrument>), Box<dyn std::error::Error>> {
    let start: Period = "2023-01".parse()?;
    let market: Vec<f64> = (0..=MONTHS).map(|i| 0.01 * (i as f64 * 1.3).sin()).collect();

    let mut store = PriceStore::new();
    let mut period = start.pred();
    let mut close = 400.0;
    for r in &market {
        store.insert(Symbol::new("SPY"), Observation::new(period, close));
        close *= 1.0 + r;
        period = period.succ();
    }

    let mut instruments = Vec::with_capacity(UNIVERSE.len());
    for &(symbol, sector, drift, sensitivity) in UNIVERSE {
        let symbol = Symbol::new(symbol);
        let mut period = start;
        let mut close = 100.0;
        for r in &market[1..] {
            store.insert(symbol.clone(), Observation::new(period, close));
            close *= 1.0 + drift + sensitivity * r;
            period = period.succ();
        }
        instruments.push(Instrument::new(symbol, SectorLabel::parse(Some(sector))));
    }

    Ok((store, instruments))
}
