//! Batch processing.
//!
//! This module provides:
//! - The sequential orchestrator with cancellation and progress events
//! - Result and existence records
//! - Per-status run summaries

mod assemble;
mod orchestrator;
mod progress;
mod record;
mod summary;

pub use assemble::{assemble_record, contacts_blob};
pub use orchestrator::{BatchOrchestrator, BatchSettings, BatchState};
pub use progress::{
    percent_complete, LogProgressSink, ProgressEvent, ProgressSink, ProgressStatus, ProgressStep,
};
pub use record::{ExistenceRecord, Presence, RecordStatus, ResultRecord, NOT_FOUND_MESSAGE};
pub use summary::{BatchSummary, ExistenceSummary, StatusLabel, StatusSummary};
