//! inn_scraper library: registry lookups for batches of INN identifiers
//!
//! Resolves taxpayer identifiers against the public registry of personal-data
//! operators, reaching the site through an ordered list of proxy relays,
//! scraping each operator's detail page, normalizing the contact fields it
//! finds, and exporting everything to a spreadsheet.
//!
//! # Example
//!
//! ```no_run
//! use inn_scraper::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     identifiers: vec!["7701234567".to_string(), "500100732259".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config, &|| false).await?;
//! println!(
//!     "Processed {} identifiers: {} found, {} not found, {} failed",
//!     report.processed, report.succeeded, report.not_found, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod batch;
pub mod config;
pub mod contacts;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod identifiers;
pub mod initialization;
pub mod registry;
mod run;
mod utils;

// Re-export public API
pub use batch::{
    BatchOrchestrator, BatchSettings, BatchState, BatchSummary, ExistenceRecord, ProgressEvent,
    ProgressSink, RecordStatus, ResultRecord,
};
pub use config::{Config, LogFormat, LogLevel};
pub use contacts::{extract_contacts, ContactBundle, ContactExtractor};
pub use error_handling::{ExportError, FetchError, InitializationError, InputError};
pub use fetch::ProxyFetcher;
pub use identifiers::{parse_identifiers, Identifier};
pub use registry::{DetailFieldMap, RegistryLookup, RegistryRecordId, RegistryResolver};
pub use run::{collect_identifiers, run_batch, BatchRunReport, RunMode};
