//! JSON Lines export.
//!
//! Each line is one serialized record, suitable for `jq` or loading into
//! another tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error_handling::ExportError;

/// Writes `records` to `path`, one JSON object per line.
///
/// # Returns
///
/// The number of records written.
///
/// # Errors
///
/// Returns `ExportError::Io` or `ExportError::Serialize` on failure.
pub fn export_jsonl<T: Serialize>(records: &[T], path: &Path) -> Result<usize, ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(records.len())
}
