//! Progress logging utilities.

use log::info;

/// Logs throughput for a finished batch.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Number of addresses looked up
pub fn log_progress(start_time: std::time::Instant, completed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Looked up {} addresses in {:.2} seconds (~{:.2} addresses/sec)",
        completed, elapsed_secs, rate
    );
}
