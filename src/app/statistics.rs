//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Prints a one-line summary of the run.
pub fn print_simple_summary(total: usize, resolved: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "Processed {} address{} ({} resolved, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "es" },
        resolved,
        failed,
        elapsed_seconds
    );
}

/// Prints failure and outcome counters to the log.
///
/// Only categories with a non-zero count are listed.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Failed attempt counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Address outcome counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
