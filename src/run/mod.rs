//! End-to-end run: collect identifiers, resolve them, write the exports.

mod input;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::batch::{
    BatchOrchestrator, BatchSettings, BatchState, BatchSummary, ExistenceSummary,
    LogProgressSink, Presence, RecordStatus,
};
use crate::config::{Config, DEFAULT_MISSING_OUTPUT_FILE};
use crate::export::{export_jsonl, export_missing, export_results};
use crate::initialization::{init_client, init_fetcher};
use crate::registry::RegistryResolver;

pub use input::collect_identifiers;

/// Which pipeline a run executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Id lookup, detail fetch and contact extraction
    Full,
    /// Presence check only
    CheckOnly,
}

/// Results of a run.
#[derive(Debug, Clone)]
pub struct BatchRunReport {
    pub mode: RunMode,
    /// Identifiers collected from the input
    pub requested: usize,
    /// Records produced (fewer than `requested` after a cancellation)
    pub processed: usize,
    /// Successful lookups, or identifiers found by a check
    pub succeeded: usize,
    pub not_found: usize,
    pub failed: usize,
    /// Files written, in the order they were written
    pub outputs: Vec<PathBuf>,
    pub state: BatchState,
    pub elapsed_seconds: f64,
}

/// Runs the configured pipeline.
///
/// `is_cancelled` is polled before each identifier.
///
/// # Errors
///
/// Returns an error if no identifiers were supplied, if initialization
/// fails, or if an export cannot be written. Per-identifier failures are
/// reported in the records, not here.
pub async fn run_batch(config: Config, is_cancelled: &dyn Fn() -> bool) -> Result<BatchRunReport> {
    let start = Instant::now();

    let identifiers = collect_identifiers(&config).await?;
    if identifiers.is_empty() {
        bail!("no valid identifiers (10 or 12 digits) found in input");
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let fetcher = init_fetcher(client, &config);
    let resolver = RegistryResolver::with_base_url(fetcher, &config.registry_url)
        .with_context(|| format!("Invalid registry URL: {}", config.registry_url))?
        .with_check_timeout(std::time::Duration::from_secs(config.check_timeout_seconds));

    let settings = BatchSettings {
        request_delay: std::time::Duration::from_millis(config.request_delay_ms),
        dedupe: config.dedupe,
        ..Default::default()
    };
    let mut orchestrator = BatchOrchestrator::new(resolver).with_settings(settings);
    let mut sink = LogProgressSink;
    let mut outputs = Vec::new();

    let report = if config.check_only {
        let records = orchestrator
            .run_existence_check(&identifiers, &mut sink, is_cancelled)
            .await;
        let summary = ExistenceSummary::from_existence(&records);
        summary.log_summary();

        if !records.is_empty() {
            let path = config
                .missing_output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MISSING_OUTPUT_FILE));
            if let Some(written) =
                export_missing(&records, &path).context("Failed to export missing identifiers")?
            {
                outputs.push(written);
            }
        }
        if let Some(path) = &config.jsonl {
            export_jsonl(&records, path).context("Failed to write JSON Lines output")?;
            outputs.push(path.clone());
        }

        BatchRunReport {
            mode: RunMode::CheckOnly,
            requested: identifiers.len(),
            processed: summary.total(),
            succeeded: summary.count(Presence::Found),
            not_found: summary.count(Presence::Missing),
            failed: summary.count(Presence::Error),
            outputs,
            state: orchestrator.state(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    } else {
        let records = orchestrator.run(&identifiers, &mut sink, is_cancelled).await;
        let summary = BatchSummary::from_records(&records);
        summary.log_summary();

        if records.is_empty() {
            warn!("No records collected; nothing exported");
        } else {
            let written = export_results(&records, &config.output)
                .context("Failed to export results")?;
            outputs.push(written);
            if let Some(path) = &config.jsonl {
                export_jsonl(&records, path).context("Failed to write JSON Lines output")?;
                outputs.push(path.clone());
            }
        }

        BatchRunReport {
            mode: RunMode::Full,
            requested: identifiers.len(),
            processed: summary.total(),
            succeeded: summary.count(RecordStatus::Success),
            not_found: summary.count(RecordStatus::NotFound),
            failed: summary.count(RecordStatus::Error),
            outputs,
            state: orchestrator.state(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    };

    info!(
        "Run finished ({:?}) in {:.1}s",
        report.state, report.elapsed_seconds
    );
    Ok(report)
}
