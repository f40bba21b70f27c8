//! Spreadsheet output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tempfile::NamedTempFile;

use crate::config::{OUTPUT_HEADERS, SENTINEL_ERROR};
use crate::error_handling::SpreadsheetError;
use crate::lookup::LookupResult;

use super::types::{InputSheet, OutputFormat};

/// Checks that `path` names a writable spreadsheet format.
///
/// # Errors
///
/// Returns `SpreadsheetError::InvalidOutputExtension` unless the extension is
/// `.xlsx` or `.csv`.
pub fn validate_output_path(path: &Path) -> Result<OutputFormat, SpreadsheetError> {
    OutputFormat::from_path(path)
        .ok_or_else(|| SpreadsheetError::InvalidOutputExtension(path.to_path_buf()))
}

/// Pairs each input row with its result columns.
///
/// `results` holds one entry per non-blank row, in row order. Blank rows get
/// empty cells. An address without a result is written as failed.
pub fn enriched_rows<'a>(
    sheet: &'a InputSheet,
    results: &'a [LookupResult],
) -> impl Iterator<Item = [&'a str; 5]> + 'a {
    let mut results = results.iter();
    sheet.rows().iter().map(move |row| match row {
        Some(address) => {
            let [asn, asn_name, country, state] = results
                .next()
                .map_or([SENTINEL_ERROR; 4], LookupResult::columns);
            [address.as_str(), asn, asn_name, country, state]
        }
        None => [""; 5],
    })
}

/// Writes the enriched table to `path`.
///
/// The header row is `IP, ASN, ASN Name, Country, State`, followed by one row
/// per input row. The table is written to a temporary file next to `path` and
/// renamed into place once complete, so a failed write leaves no partial file.
pub fn write_output(
    path: &Path,
    format: OutputFormat,
    sheet: &InputSheet,
    results: &[LookupResult],
) -> Result<(), SpreadsheetError> {
    if results.len() != sheet.address_count() {
        log::error!(
            "{} result(s) for {} address(es); unmatched addresses are written as failed",
            results.len(),
            sheet.address_count()
        );
    }

    write_atomically(path, |file| match format {
        OutputFormat::Xlsx => write_xlsx(file, sheet, results),
        OutputFormat::Csv => write_csv(file, sheet, results),
    })?;
    log::info!("Wrote {} row(s) to {}", sheet.len(), path.display());
    Ok(())
}

/// Runs `write` against a temporary file in the directory of `path`, then
/// renames it to `path`. The temporary file is removed on any error.
fn write_atomically<F>(path: &Path, write: F) -> Result<(), SpreadsheetError>
where
    F: FnOnce(&mut File) -> Result<(), SpreadsheetError>,
{
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    write(temp.as_file_mut())?;
    temp.as_file_mut().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_xlsx(
    file: &mut File,
    sheet: &InputSheet,
    results: &[LookupResult],
) -> Result<(), SpreadsheetError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(OUTPUT_HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }
    for (row, values) in (1u32..).zip(enriched_rows(sheet, results)) {
        for (col, value) in (0u16..).zip(values) {
            if !value.is_empty() {
                worksheet.write_string(row, col, value)?;
            }
        }
    }

    file.write_all(&workbook.save_to_buffer()?)?;
    Ok(())
}

fn write_csv(
    file: &mut File,
    sheet: &InputSheet,
    results: &[LookupResult],
) -> Result<(), SpreadsheetError> {
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(OUTPUT_HEADERS)?;
    for values in enriched_rows(sheet, results) {
        writer.write_record(values)?;
    }
    writer.flush()?;
    Ok(())
}
