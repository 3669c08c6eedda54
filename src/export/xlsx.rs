//! Operators workbook export.

use std::path::{Path, PathBuf};

use log::info;
use rust_xlsxwriter::{Format, Workbook};

use crate::batch::ResultRecord;
use crate::config::{RESULTS_SHEET_NAME, RESULT_COLUMNS};
use crate::error_handling::ExportError;

/// Writes a single-sheet workbook: bold headers, fixed column widths, and an
/// auto-filter spanning the header and every data row.
pub(super) fn write_sheet<const N: usize>(
    path: &Path,
    sheet_name: &str,
    columns: &[(&str, f64); N],
    rows: &[[String; N]],
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, (header, width)) in columns.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, *width)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(row_num, col as u16, value.as_str())?;
        }
    }

    worksheet.autofilter(0, 0, rows.len() as u32, (N - 1) as u16)?;
    workbook.save(path)?;
    Ok(())
}

/// Exports result records to an xlsx workbook.
///
/// # Arguments
///
/// * `records` - Records in output order
/// * `path` - Destination file; overwritten if it exists
///
/// # Returns
///
/// The path written.
///
/// # Errors
///
/// Returns `ExportError::Empty` when `records` is empty, or a write error.
pub fn export_results(records: &[ResultRecord], path: &Path) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let rows: Vec<[String; 10]> = records.iter().map(ResultRecord::to_row).collect();
    write_sheet(path, RESULTS_SHEET_NAME, &RESULT_COLUMNS, &rows)?;

    info!("Exported {} record(s) to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}
