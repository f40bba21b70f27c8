//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize lookup errors and configure the
//! retry strategy.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::stats::ProcessingStats;
use super::types::{ErrorType, LookupError};

/// Creates a fixed-interval retry strategy.
///
/// Yields `delay` once per retry, `max_attempts - 1` times, so the initial
/// attempt plus the retries never exceed `max_attempts`. A `max_attempts` of
/// zero or one yields no retries.
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::Retry`.
pub fn get_retry_strategy(delay: Duration, max_attempts: usize) -> impl Iterator<Item = Duration> {
    FixedInterval::new(delay).take(max_attempts.saturating_sub(1))
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes are checked first; otherwise the error kind reported by
/// reqwest decides.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            429 => return ErrorType::HttpRequestTooManyRequests,
            _ if status.is_server_error() => return ErrorType::HttpRequestServerError,
            _ if status.is_client_error() => return ErrorType::HttpRequestStatusError,
            _ => {}
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a failed lookup attempt.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::Http(e) => categorize_reqwest_error(e),
        LookupError::Timeout(_) => ErrorType::AttemptTimeout,
        LookupError::Rejected { .. } => ErrorType::LookupRejected,
    }
}

/// Updates processing statistics for a failed lookup attempt.
pub fn update_error_stats(stats: &ProcessingStats, error: &LookupError) {
    stats.increment_error(categorize_lookup_error(error));
}
