//! CLI entry point for the listing analyzer.
//!
//! Provides one subcommand per analysis over short-term-rental listing
//! snapshots: price/satisfaction correlation, listings per host, average
//! price per neighborhood, and the largest price change across snapshots.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listing_analyzer::analyzers::analyzer::{
    analyze_correlation, analyze_host_distribution, analyze_neighborhoods, analyze_price_change,
};
use listing_analyzer::analyzers::distribution::distribution_points;
use listing_analyzer::analyzers::neighborhood::average_rows;
use listing_analyzer::config::AnalyzerConfig;
use listing_analyzer::output::{print_json, print_pretty, write_csv};
use listing_analyzer::record::RoomType;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "listing_analyzer")]
#[command(about = "Analyze short-term-rental listing snapshots", long_about = None)]
struct Cli {
    /// JSON file with reader settings
    #[arg(long, global = true)]
    config: Option<String>,

    /// Field delimiter, overrides the config file
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    /// Treat double quotes as CSV quoting (`--quoting false` turns it off),
    /// overrides the config file
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    quoting: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spearman correlation between price and overall satisfaction
    Correlation {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Distribution of how many listings each host operates
    Hosts {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write (listings, hosts) points to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Average "Entire home/apt" price per neighborhood
    Neighborhoods {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write (neighborhood, average_price) rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Largest per-listing price change across dated snapshots
    PriceChange {
        /// "Entire home/apt", "Private room" or "Shared room"
        #[arg(short, long)]
        room_type: RoomType,

        /// Snapshot files named like `<anything>_YYYY-MM-DD.csv`
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/listing_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("listing_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    }
    .with_overrides(cli.delimiter, cli.quoting);
    let options = config.reader_options()?;

    match cli.command {
        Commands::Correlation { file } => {
            let report = analyze_correlation(&file, &options)
                .with_context(|| format!("correlation analysis of {}", file.display()))?;
            print_json(&report)?;
        }
        Commands::Hosts { file, csv } => {
            let counts = analyze_host_distribution(&file, &options)
                .with_context(|| format!("host analysis of {}", file.display()))?;
            let points = distribution_points(&counts);
            print_json(&points)?;

            if let Some(path) = csv {
                write_csv(&path, &points)?;
                info!(path = %path.display(), "Host distribution exported");
            }
        }
        Commands::Neighborhoods { file, csv } => {
            let averages = analyze_neighborhoods(&file, &options)
                .with_context(|| format!("neighborhood analysis of {}", file.display()))?;
            print_json(&averages)?;

            if let Some(path) = csv {
                write_csv(&path, &average_rows(&averages))?;
                info!(path = %path.display(), "Neighborhood averages exported");
            }
        }
        Commands::PriceChange { room_type, files } => {
            let summary = analyze_price_change(&files, room_type, &options)
                .context("price change analysis")?;
            print_pretty(&summary);

            for failure in &summary.failures {
                warn!(error = %failure, "Room excluded");
            }
            match summary.extremal {
                Some(change) => print_json(&change)?,
                None => warn!("No room had a usable price history"),
            }
        }
    }

    Ok(())
}
