//! Identifier extraction from pasted text and uploaded files.
//!
//! Unlike [`parse_identifiers`](super::parse_identifiers), these helpers strip
//! every non-digit from each piece (so `ИНН: 7701-234-567` still counts) and
//! deduplicate the result.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, info};

use super::{dedupe_identifiers, Identifier};
use crate::error_handling::InputError;

/// Header fragments that mark the identifier column (compared lowercase).
const HEADER_MARKERS: &[&str] = &["инн", "inn", "идентификационный"];

/// File extensions handled by the spreadsheet reader.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn identifier_from_cell(value: &str) -> Option<Identifier> {
    Identifier::parse(&digits_only(value)).ok()
}

/// Extracts identifiers from pasted text (one or more per line, separated by
/// newlines, commas or semicolons).
pub fn extract_from_text(text: &str) -> Vec<Identifier> {
    let found = text
        .split(['\n', ',', ';'])
        .filter_map(identifier_from_cell)
        .collect();
    dedupe_identifiers(found)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Excel stores long numbers as floats; integral values print without a fraction
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        _ => String::new(),
    }
}

/// Extracts identifiers from the first sheet of a spreadsheet.
///
/// When the header row names an identifier column, only that column is read;
/// otherwise every row is scanned and its first identifier-shaped cell is taken.
///
/// # Errors
///
/// Returns `InputError::Spreadsheet` when the file cannot be opened as a
/// workbook or has no sheets.
pub fn extract_from_spreadsheet(path: &Path) -> Result<Vec<Identifier>, InputError> {
    let spreadsheet_error = |reason: String| InputError::Spreadsheet {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| spreadsheet_error("workbook has no sheets".to_string()))?
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let header_column = rows.first().and_then(|header| {
        header.iter().position(|cell| {
            let lower = cell.to_lowercase();
            HEADER_MARKERS.iter().any(|marker| lower.contains(marker))
        })
    });

    let found: Vec<Identifier> = match header_column {
        Some(column) => {
            debug!("Identifier column found at index {}", column);
            rows.iter()
                .skip(1)
                .filter_map(|row| row.get(column))
                .filter_map(|cell| identifier_from_cell(cell))
                .collect()
        }
        None => {
            debug!("No identifier header found, scanning every cell");
            rows.iter()
                .filter_map(|row| row.iter().find_map(|cell| identifier_from_cell(cell)))
                .collect()
        }
    };

    let identifiers = dedupe_identifiers(found);
    info!(
        "Read {} identifier(s) from {}",
        identifiers.len(),
        path.display()
    );
    Ok(identifiers)
}

/// Extracts identifiers from a file, choosing the reader by extension.
///
/// # Errors
///
/// Returns `InputError` when the file cannot be read.
pub fn extract_from_file(path: &Path) -> Result<Vec<Identifier>, InputError> {
    let is_spreadsheet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);

    if is_spreadsheet {
        return extract_from_spreadsheet(path);
    }

    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(extract_from_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(ids: &[Identifier]) -> Vec<&str> {
        ids.iter().map(Identifier::as_str).collect()
    }

    #[test]
    fn test_extract_from_text_strips_noise_and_dedupes() {
        let ids = extract_from_text("ИНН: 7701-234-567\n7701234567, 500100732259;\nmусор 123");
        assert_eq!(strs(&ids), vec!["7701234567", "500100732259"]);
    }

    #[test]
    fn test_extract_from_text_does_not_split_on_spaces() {
        // Spaces inside a piece are noise, not separators
        let ids = extract_from_text("77 01 23 45 67");
        assert_eq!(strs(&ids), vec!["7701234567"]);
    }

    #[test]
    fn test_cell_text_formats_integral_floats() {
        assert_eq!(cell_text(&Data::Float(7701234567.0)), "7701234567");
        assert_eq!(cell_text(&Data::Int(500100732259)), "500100732259");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_extract_from_file_reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inns.txt");
        std::fs::write(&path, "7701234567\n7702345678\n7701234567\n").unwrap();
        let ids = extract_from_file(&path).unwrap();
        assert_eq!(strs(&ids), vec!["7701234567", "7702345678"]);
    }

    #[test]
    fn test_extract_from_file_missing_text_file() {
        let err = extract_from_file(Path::new("/nonexistent/inns.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_extract_from_spreadsheet_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();
        let err = extract_from_spreadsheet(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported or corrupt format"));
    }
}
