use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use shared::error::AppError;

use revenue_engine::{Config, RevenueAllocator, init_logger_with_file, quote};

/// Quote store/cast revenue splits for reservations
///
/// Reads one reservation object or an array of them as JSON and prints the
/// itemized breakdown plus a summary.
#[derive(Debug, Parser)]
#[command(name = "revenue-quote", version, about)]
struct Cli {
    /// Input JSON file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Default welfare rate (%) for reservations that omit one
    #[arg(long)]
    welfare_rate: Option<Decimal>,

    /// Default store share (%) for options and designation fees
    #[arg(long)]
    store_ratio: Option<Decimal>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Directory for daily rolling log files
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger_with_file(Some(&cli.log_level), cli.log_dir.as_deref());

    // 2. Configuration
    let config = Config::from_env()
        .with_overrides(cli.welfare_rate, cli.store_ratio)
        .map_err(log_failure)?;
    let allocator = RevenueAllocator::new(config.policy());
    tracing::debug!(
        welfare_rate = %config.default_welfare_rate,
        store_ratio = %config.default_store_ratio,
        environment = %config.environment,
        "Revenue policy loaded"
    );

    // 3. Quote
    let stdout = io::stdout().lock();
    let report = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            quote::run(&allocator, BufReader::new(file), stdout, cli.compact)
        }
        None => quote::run(&allocator, io::stdin().lock(), stdout, cli.compact),
    }
    .map_err(log_failure)?;

    tracing::info!(
        reservations = report.summary.reservation_count,
        total = report.summary.total,
        store_revenue = report.summary.store_revenue,
        staff_revenue = report.summary.staff_revenue,
        "Quote complete"
    );

    Ok(())
}

fn log_failure(err: AppError) -> anyhow::Error {
    tracing::error!(
        code = %err.code,
        category = err.code.category().name(),
        details = ?err.details,
        "{}",
        err.message
    );
    err.into()
}
