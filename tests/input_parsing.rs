//! Tests for identifier input: free text, spreadsheets, and the collected CLI input.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use inn_scraper::identifiers::{extract_from_file, extract_from_spreadsheet};
use inn_scraper::{collect_identifiers, parse_identifiers, Config, Identifier};

fn strs(ids: &[Identifier]) -> Vec<&str> {
    ids.iter().map(Identifier::as_str).collect()
}

/// Writes a one-sheet workbook. Cells that parse as integers are stored as numbers.
fn write_workbook(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let written = match value.parse::<f64>() {
                Ok(number) => worksheet.write_number(r as u32, c as u16, number),
                Err(_) => worksheet.write_string(r as u32, c as u16, *value),
            };
            written.expect("cell should be written");
        }
    }
    workbook.save(path).expect("workbook should save");
}

#[test]
fn test_parse_identifiers_example_input() {
    let ids = parse_identifiers("1234567890, abc, 123456789012");
    assert_eq!(strs(&ids), vec!["1234567890", "123456789012"]);
}

#[test]
fn test_spreadsheet_identifier_column_by_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inns.xlsx");
    write_workbook(
        &path,
        &[
            &["Телефон", "ИНН организации", "Комментарий"],
            &["89991234567", "7701234567", "первый"],
            &["1234567890", "ИНН 500100732259", ""],
            &["", "нет данных", "7702345678"],
            &["", "7701234567", "повтор"],
        ],
    );

    let ids = extract_from_spreadsheet(&path).unwrap();
    // Only the header column is read, numeric cells included
    assert_eq!(strs(&ids), vec!["7701234567", "500100732259"]);
}

#[test]
fn test_spreadsheet_without_header_scans_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inns.xlsx");
    write_workbook(
        &path,
        &[
            &["Компания", "7701234567"],
            &["7702345678", "500100732259"],
            &["пусто", ""],
        ],
    );

    let ids = extract_from_file(&path).unwrap();
    assert_eq!(strs(&ids), vec!["7701234567", "7702345678"]);
}

#[tokio::test]
async fn test_collect_identifiers_from_arguments_and_spreadsheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inns.xlsx");
    write_workbook(&path, &[&["INN"], &["7703456789"], &["7701234567"]]);

    let config = Config {
        identifiers: vec!["7701234567 7702345678".to_string()],
        input: Some(path),
        ..Default::default()
    };
    let ids = collect_identifiers(&config).await.unwrap();
    // Argument and file identifiers are concatenated; duplicates across them survive
    assert_eq!(
        strs(&ids),
        vec!["7701234567", "7702345678", "7703456789", "7701234567"]
    );
}

#[tokio::test]
async fn test_collect_identifiers_missing_file_is_error() {
    let config = Config {
        input: Some("/nonexistent/inns.csv".into()),
        ..Default::default()
    };
    let err = collect_identifiers(&config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read identifiers from"));
}
