//! Spreadsheet data structures.

use std::path::Path;

/// Rows of the input sheet's address column, header excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSheet {
    rows: Vec<Option<String>>,
}

impl InputSheet {
    /// Creates a sheet from its rows; `None` marks a blank cell.
    pub fn new(rows: Vec<Option<String>>) -> Self {
        Self { rows }
    }

    /// All rows, blank ones included.
    pub fn rows(&self) -> &[Option<String>] {
        &self.rows
    }

    /// Non-blank addresses in row order. This is the batch input.
    pub fn addresses(&self) -> Vec<&str> {
        self.rows.iter().filter_map(|row| row.as_deref()).collect()
    }

    /// Number of non-blank addresses.
    pub fn address_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_some()).count()
    }

    /// Number of rows, blank ones included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Readable input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Excel or OpenDocument workbook
    Workbook,
    /// Comma-separated values
    Csv,
}

impl InputFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension(path)?.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(InputFormat::Workbook),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Writable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension(path)?.as_str() {
            "xlsx" => Some(OutputFormat::Xlsx),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
