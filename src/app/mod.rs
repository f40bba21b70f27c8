//! Main application modules.
//!
//! This module provides progress logging, statistics printing and the
//! interactive prompts used by the binary.

pub mod logging;
pub mod prompt;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use prompt::{prompt_path, prompt_path_from};
pub use statistics::{print_error_statistics, print_simple_summary};
