//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `inn_scraper` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C cancellation
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::process;
use tokio_util::sync::CancellationToken;

use inn_scraper::initialization::init_logger_with;
use inn_scraper::{run_batch, Config, RunMode};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. REGISTRY_URL
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Ctrl-C stops the batch before the next identifier; the one in flight finishes
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current identifier");
            signal_token.cancel();
        }
    });

    let is_cancelled = || token.is_cancelled();
    match run_batch(config, &is_cancelled).await {
        Ok(report) => {
            let (found, missing) = match report.mode {
                RunMode::Full => ("succeeded", "not found"),
                RunMode::CheckOnly => ("found", "missing"),
            };
            println!(
                "✅ Processed {} of {} INN{} ({} {}, {} {}, {} failed) in {:.1}s",
                report.processed,
                report.requested,
                if report.requested == 1 { "" } else { "s" },
                report.succeeded,
                found,
                report.not_found,
                missing,
                report.failed,
                report.elapsed_seconds
            );
            for path in &report.outputs {
                println!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("inn_scraper error: {:#}", e);
            process::exit(1);
        }
    }
}
