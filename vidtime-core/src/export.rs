//! Spreadsheet export of accumulated measurement records.
//!
//! Writes an .xlsx workbook with exactly two columns, one row per record in
//! accumulation order. Export is the only operation allowed to fail a run;
//! the caller's in-memory records survive a failed write for a retry with a
//! different destination.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use crate::VideoRecord;
use crate::error::{CoreError, CoreResult};

pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// First column header, the display file name.
pub const TITLE_HEADER: &str = "Title";
/// Second column header, the running time in minutes.
pub const RUNTIME_HEADER: &str = "Runtime (min)";

/// Appends the spreadsheet extension when the chosen destination lacks it.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SPREADSHEET_EXTENSION))
        .unwrap_or(false);

    if has_extension {
        path.to_path_buf()
    } else {
        let mut with_extension = path.as_os_str().to_os_string();
        with_extension.push(".");
        with_extension.push(SPREADSHEET_EXTENSION);
        PathBuf::from(with_extension)
    }
}

/// Writes `records` to an .xlsx workbook at `path`, returning the resolved
/// destination.
///
/// An empty collection is `Err(CoreError::NoRecords)` and writes nothing.
pub fn write_spreadsheet(path: &Path, records: &[VideoRecord]) -> CoreResult<PathBuf> {
    if records.is_empty() {
        return Err(CoreError::NoRecords);
    }

    let path = resolve_output_path(path);
    log::debug!("Writing {} record(s) to {}", records.len(), path.display());

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.write_string_with_format(0, 0, TITLE_HEADER, &header)?;
    worksheet.write_string_with_format(0, 1, RUNTIME_HEADER, &header)?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.name.as_str())?;
        worksheet.write_number(row, 1, record.minutes)?;
    }

    workbook.save(&path)?;
    Ok(path)
}
