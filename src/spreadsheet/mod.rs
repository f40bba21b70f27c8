//! Spreadsheet input and output.
//!
//! This module provides:
//! - Reading the address column from `.xlsx`/`.xls`/`.ods`/`.csv` files
//! - Output path validation
//! - Writing the enriched table as `.xlsx` or `.csv`

mod reader;
mod types;
mod writer;

// Re-export public API
pub use reader::read_input;
pub use types::{InputFormat, InputSheet, OutputFormat};
pub use writer::{enriched_rows, validate_output_path, write_output};
