//! Workbook of identifiers missing from the registry.

use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use super::xlsx::write_sheet;
use crate::batch::{ExistenceRecord, Presence};
use crate::config::{MISSING_COLUMNS, MISSING_SHEET_NAME};
use crate::error_handling::ExportError;

const MISSING_STATUS: &str = "Не найден в системе";

/// Exports identifiers whose check came back negative.
///
/// Returns `Ok(None)` without writing anything when every identifier was
/// found. Failed checks are not counted as missing.
///
/// # Errors
///
/// Returns `ExportError::Empty` when `records` is empty, or a write error.
pub fn export_missing(
    records: &[ExistenceRecord],
    path: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let checked_on = Local::now().format("%d.%m.%Y").to_string();
    let rows: Vec<[String; 3]> = records
        .iter()
        .filter(|r| r.found == Presence::Missing)
        .map(|r| {
            [
                r.identifier.to_string(),
                MISSING_STATUS.to_string(),
                checked_on.clone(),
            ]
        })
        .collect();

    if rows.is_empty() {
        info!("Every identifier was found; no missing list written");
        return Ok(None);
    }

    write_sheet(path, MISSING_SHEET_NAME, &MISSING_COLUMNS, &rows)?;
    info!(
        "Exported {} missing identifier(s) to {}",
        rows.len(),
        path.display()
    );
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::Identifier;

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    #[test]
    fn test_empty_input_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_missing(&[], &dir.path().join("m.xlsx")).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
    }

    #[test]
    fn test_nothing_missing_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.xlsx");
        let records = vec![
            ExistenceRecord::checked(id("7701234567"), true),
            ExistenceRecord::failed(id("7702345678"), "timeout"),
        ];
        assert_eq!(export_missing(&records, &path).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_rows_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.xlsx");
        let records = vec![
            ExistenceRecord::checked(id("7701234567"), true),
            ExistenceRecord::checked(id("7702345678"), false),
        ];
        assert_eq!(export_missing(&records, &path).unwrap(), Some(path.clone()));
        assert!(path.exists());
    }
}
