//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The HTTP client used by every lookup
//! - The logger (terminal or diagnostic log file)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger_to_file, init_logger_with};
