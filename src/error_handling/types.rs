//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories used to count lookup failures.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
///
/// These are batch-fatal: nothing is looked up or written when one occurs.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the logger with custom message (e.g., file creation).
    #[error("Logger initialization error: {0}")]
    LoggerSetupError(String),

    /// Error initializing the HTTP client shared by all lookups.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for spreadsheet input and output.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file extension is not a supported spreadsheet format.
    #[error("Unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The output path does not end in a writable spreadsheet extension.
    #[error("Output file must be an .xlsx or .csv file: {}", .0.display())]
    InvalidOutputExtension(PathBuf),

    /// The workbook contains no worksheet to read addresses from.
    #[error("Workbook has no worksheets: {}", .0.display())]
    NoWorksheet(PathBuf),

    /// The workbook could not be parsed.
    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The output workbook could not be written.
    #[error("Workbook write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV read or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a single failed lookup attempt.
///
/// Every variant is retried by the lookup client; none of them reaches the
/// batch orchestrator.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request failed to complete (connection, HTTP status, body decoding).
    #[error("Request error: {0}")]
    Http(#[from] ReqwestError),

    /// The attempt did not complete within the per-attempt timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered but reported that the address could not be resolved.
    #[error("{message}")]
    Rejected {
        /// Message reported by the service
        message: String,
    },
}

impl LookupError {
    /// Returns true for failures reported by the service itself (as opposed to
    /// transport failures).
    pub fn is_logical(&self) -> bool {
        matches!(self, LookupError::Rejected { .. })
    }
}

/// Categories of lookup failures.
///
/// Each failed attempt increments exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestStatusError,
    HttpRequestTooManyRequests,   // 429 Too Many Requests
    HttpRequestServerError,       // 5xx
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Attempt-level errors
    AttemptTimeout,
    // Service-reported errors
    LookupRejected,
}

/// Types of informational metrics recorded per address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Address resolved on the first attempt
    ResolvedFirstAttempt,
    /// Address resolved after one or more retries
    ResolvedAfterRetry,
    /// All attempts failed; the sentinel record was produced
    AttemptsExhausted,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::AttemptTimeout => "Attempt timeout",
            ErrorType::LookupRejected => "Lookup rejected by service",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ResolvedFirstAttempt => "Resolved on first attempt",
            InfoType::ResolvedAfterRetry => "Resolved after retry",
            InfoType::AttemptsExhausted => "Attempts exhausted",
        }
    }
}
