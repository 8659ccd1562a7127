//! Dynamic alpha model CLI.
//!
//! Fetches trailing monthly prices, checks that the benchmark covers the
//! current month, scores every instrument and prints the best two per
//! sector.
//!
//! Usage: `cargo run --bin dam --features cli -- [--config dam.toml] [SYMBOL...]`

use std::{fs::File, path::PathBuf, process};

use chrono::Utc;
use clap::Parser;
use dynalpha::{
    data::{Freshness, YahooMonthlySource, check_freshness},
    model::{DamPipeline, PriceStore, ScoringPolicy},
    primitives::Symbol,
    settings::load_settings,
    traits::SectorSource,
    utils::{factors_frame, rankings_frame},
};
use polars::prelude::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dam")]
#[command(about = "Rank equities within sectors by dynamic alpha score", long_about = None)]
#[command(version)]
struct Cli {
    /// Symbols to score; the configured universe when omitted
    symbols: Vec<String>,

    /// Settings file (defaults to ./dam.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Run even when the benchmark does not cover the current month
    #[arg(long)]
    allow_stale: bool,

    /// Leave a period unscored when any factor is missing instead of zero-filling
    #[arg(long)]
    propagate_unavailable: bool,

    /// Compute instruments on a single thread
    #[arg(long)]
    sequential: bool,

    /// Print every instrument's factor table
    #[arg(long)]
    show_factors: bool,

    /// Write factor tables to a CSV file
    #[arg(long)]
    factors_csv: Option<PathBuf>,

    /// Write sector rankings to a CSV file
    #[arg(long)]
    rankings_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.propagate_unavailable {
        settings.model.scoring = ScoringPolicy::PropagateUnavailable;
    }
    if cli.sequential {
        settings.model.parallel = false;
    }
    let pipeline = DamPipeline::with_config(settings.model.clone())?;

    let sectors = settings.data.sector_map();
    let universe: Vec<Symbol> = if cli.symbols.is_empty() {
        sectors.symbols().to_vec()
    } else {
        cli.symbols.iter().map(|s| Symbol::new(s.trim().to_uppercase())).collect()
    };
    let benchmark = settings.data.benchmark_symbol();
    let probe = settings.data.probe_symbol();

    let mut requests = vec![benchmark.clone()];
    if probe != benchmark {
        requests.push(probe.clone());
    }
    requests.extend(universe.iter().filter(|s| **s != benchmark && **s != probe).cloned());

    println!("Fetching {} months for {} symbols...", settings.data.trailing_months, requests.len());
    let source = YahooMonthlySource::new(settings.data.trailing_months)?;
    let mut store = PriceStore::new();
    for (symbol, result) in source.fetch_universe(&requests).await {
        if let Ok(observations) = result {
            store.extend(symbol, observations);
        }
    }

    let freshness = check_freshness(store.latest_period(&probe), Utc::now().date_naive());
    println!("Latest {probe} data: {freshness}");
    match freshness {
        Freshness::Current => {}
        _ if cli.allow_stale => tracing::warn!(%freshness, "running on stale data"),
        _ => {
            println!("Model not run: monthly data is not current (use --allow-stale to override)");
            return Ok(());
        }
    }

    let instruments = sectors.classify(&universe);
    let output = pipeline.run(&store, &benchmark, &instruments);

    for skipped in &output.skipped {
        println!("Skipped {}: {}", skipped.symbol, skipped.reason);
    }

    let mut factors = factors_frame(&output.tables)?;
    if cli.show_factors {
        println!("\n{factors}");
    }
    let mut rankings = rankings_frame(&output.rankings)?;
    println!("\nTop {} per sector:\n{rankings}", settings.model.top_n);

    if let Some(path) = &cli.factors_csv {
        CsvWriter::new(File::create(path)?).finish(&mut factors)?;
        println!("Factor tables written to {}", path.display());
    }
    if let Some(path) = &cli.rankings_csv {
        CsvWriter::new(File::create(path)?).finish(&mut rankings)?;
        println!("Rankings written to {}", path.display());
    }

    Ok(())
}
