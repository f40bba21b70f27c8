//! Spreadsheet input.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error_handling::SpreadsheetError;

use super::types::{InputFormat, InputSheet};

/// Reads the address column of an input spreadsheet.
///
/// Only the first worksheet and its first column are read. The first row is a
/// header and is skipped. Blank cells, and empty lines of a CSV file, are kept
/// as `None` so row positions survive into the output. Empty lines after the
/// last record are not rows.
///
/// # Errors
///
/// - `SpreadsheetError::NotFound` if `path` does not exist
/// - `SpreadsheetError::UnsupportedFormat` for an unknown extension
/// - a read error if the file cannot be parsed
pub fn read_input(path: &Path) -> Result<InputSheet, SpreadsheetError> {
    if !path.exists() {
        return Err(SpreadsheetError::NotFound(path.to_path_buf()));
    }

    let sheet = match InputFormat::from_path(path) {
        Some(InputFormat::Workbook) => read_workbook(path)?,
        Some(InputFormat::Csv) => read_csv(path)?,
        None => return Err(SpreadsheetError::UnsupportedFormat(path.to_path_buf())),
    };

    log::info!(
        "Read {} row(s), {} address(es) from {}",
        sheet.len(),
        sheet.address_count(),
        path.display()
    );
    Ok(sheet)
}

fn read_workbook(path: &Path) -> Result<InputSheet, SpreadsheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SpreadsheetError::NoWorksheet(path.to_path_buf()))??;

    // Positions below are absolute; the range itself starts at its first used cell
    let (Some((start_row, _)), Some((end_row, _))) = (range.start(), range.end()) else {
        return Ok(InputSheet::default());
    };

    let rows = (start_row + 1..=end_row)
        .map(|row| range.get_value((row, 0)).and_then(cell_to_address))
        .collect();
    Ok(InputSheet::new(rows))
}

fn read_csv(path: &Path) -> Result<InputSheet, SpreadsheetError> {
    let data = std::fs::read(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Empty lines are skipped by the parser but are blank rows of the sheet
        if let Some(position) = record.position() {
            let start = usize::try_from(position.byte())
                .map_or(data.len(), |byte| byte.min(data.len()));
            rows.extend(std::iter::repeat(None).take(skipped_empty_lines(&data, start)));
        }
        rows.push(record.get(0).and_then(normalize_address));
    }
    Ok(InputSheet::new(rows))
}

/// Counts the empty lines starting at `start`, before the next record.
///
/// A `\n` completing the previous record's `\r\n` is not an empty line.
fn skipped_empty_lines(data: &[u8], start: usize) -> usize {
    let mut i = start;
    if i > 0 && data.get(i - 1) == Some(&b'\r') && data.get(i) == Some(&b'\n') {
        i += 1;
    }

    let mut count = 0;
    while let Some(&byte) = data.get(i) {
        match byte {
            b'\r' if data.get(i + 1) == Some(&b'\n') => i += 2,
            b'\r' | b'\n' => i += 1,
            _ => break,
        }
        count += 1;
    }
    count
}

fn cell_to_address(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => normalize_address(s),
        other => normalize_address(&other.to_string()),
    }
}

fn normalize_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write CSV");
        file.flush().expect("Failed to flush file");
        file
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Path::new("/nonexistent/addresses.xlsx"));
        assert!(matches!(result, Err(SpreadsheetError::NotFound(_))));
    }

    #[test]
    fn test_read_input_unsupported_extension() {
        let file = Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("Failed to create temp file");
        let result = read_input(file.path());
        assert!(matches!(result, Err(SpreadsheetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_csv_first_column_only() {
        let file = csv_file("address,comment\n8.8.8.8,google\n1.1.1.1,cloudflare\n");
        let sheet = read_input(file.path()).expect("CSV should parse");

        assert_eq!(sheet.addresses(), vec!["8.8.8.8", "1.1.1.1"]);
    }

    #[test]
    fn test_read_csv_keeps_blank_rows_and_trims() {
        let file = csv_file("IP\n 8.8.8.8 \n,\n2001:4860:4860::8888\n");
        let sheet = read_input(file.path()).expect("CSV should parse");

        assert_eq!(
            sheet.rows(),
            &[
                Some("8.8.8.8".to_string()),
                None,
                Some("2001:4860:4860::8888".to_string())
            ]
        );
        assert_eq!(sheet.address_count(), 2);
    }

    #[test]
    fn test_read_csv_keeps_empty_lines_as_blank_rows() {
        let file = csv_file("IP\n8.8.8.8\n\n1.1.1.1\n");
        let sheet = read_input(file.path()).expect("CSV should parse");

        assert_eq!(
            sheet.rows(),
            &[Some("8.8.8.8".to_string()), None, Some("1.1.1.1".to_string())]
        );
    }

    #[test]
    fn test_read_csv_empty_lines_with_crlf_endings() {
        let file = csv_file("IP\r\n8.8.8.8\r\n\r\n\r\n1.1.1.1\r\n");
        let sheet = read_input(file.path()).expect("CSV should parse");

        assert_eq!(
            sheet.rows(),
            &[
                Some("8.8.8.8".to_string()),
                None,
                None,
                Some("1.1.1.1".to_string())
            ]
        );
    }

    #[test]
    fn test_skipped_empty_lines() {
        assert_eq!(skipped_empty_lines(b"a\n\n\nb", 2), 2);
        assert_eq!(skipped_empty_lines(b"a\r\nb", 2), 0);
        assert_eq!(skipped_empty_lines(b"a\r\n\r\nb", 2), 1);
        assert_eq!(skipped_empty_lines(b"a\nb", 2), 0);
        assert_eq!(skipped_empty_lines(b"a\n", 9), 0);
    }

    #[test]
    fn test_read_csv_header_only() {
        let file = csv_file("IP\n");
        let sheet = read_input(file.path()).expect("CSV should parse");
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_cell_to_address() {
        assert_eq!(
            cell_to_address(&Data::String(" 10.0.0.1 ".to_string())),
            Some("10.0.0.1".to_string())
        );
        assert_eq!(cell_to_address(&Data::Empty), None);
        assert_eq!(cell_to_address(&Data::String("   ".to_string())), None);
    }
}
