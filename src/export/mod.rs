//! Export of batch results.
//!
//! This module writes results to:
//! - an xlsx workbook with the fixed operators layout
//! - an xlsx workbook listing identifiers missing from the registry
//! - JSON Lines, one serialized record per line

mod jsonl;
mod missing;
mod xlsx;

pub use jsonl::export_jsonl;
pub use missing::export_missing;
pub use xlsx::export_results;
