//! Error handling.
//!
//! Error taxonomy of the pipeline:
//! - **Not found**: no registry id for an identifier; a record status, never an error value
//! - **Fetch exhausted**: every proxy attempt failed; caught per identifier
//! - **Incomplete parse**: a synthesized detail field stays empty; not an error
//! - **Export errors**: fatal to the export call only
//! - **Invalid identifiers**: silently filtered by the parser

mod types;

// Re-export public API
pub use types::{ExportError, FetchError, InitializationError, InputError};
