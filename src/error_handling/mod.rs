//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, spreadsheet, lookup)
//! - Processing statistics tracking
//! - Retry strategy configuration
//! - Categorization of failed lookup attempts

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_lookup_error, categorize_reqwest_error, get_retry_strategy, update_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, LookupError, SpreadsheetError};
