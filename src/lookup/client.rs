//! Single-address lookup with retry logic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error_handling::{
    get_retry_strategy, update_error_stats, InfoType, LookupError, ProcessingStats,
};

use super::service::LookupService;
use super::types::{IpMetadata, LookupResult, RetryPolicy};

/// Looks up one address, retrying failed attempts according to `policy`.
///
/// Transport failures (connection errors, HTTP error statuses, undecodable
/// bodies, attempt timeouts) and logical failures (the service answering with
/// a failed status) are retried alike, after a fixed `policy.delay`. A
/// successful answer returns immediately.
///
/// This function never fails: once `policy.max_attempts` attempts have failed
/// it returns `LookupResult::Failed`. Every failed attempt is logged with its
/// attempt number and cause, and counted in `stats`.
pub async fn lookup<S: LookupService>(
    service: &S,
    address: &str,
    policy: &RetryPolicy,
    stats: &ProcessingStats,
) -> LookupResult {
    if policy.max_attempts == 0 {
        log::warn!("No lookup attempts configured for {}", address);
        stats.increment_info(InfoType::AttemptsExhausted);
        return LookupResult::Failed;
    }

    // Counts attempts made, initial attempt included
    let attempt_count = AtomicUsize::new(0);

    let result = tokio_retry::Retry::spawn(
        get_retry_strategy(policy.delay, policy.max_attempts),
        || {
            let attempt = attempt_count.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                let outcome = attempt_lookup(service, address, policy.attempt_timeout).await;
                if let Err(ref e) = outcome {
                    report_failure(address, attempt, policy.max_attempts, e);
                    update_error_stats(stats, e);
                }
                outcome
            }
        },
    )
    .await;

    let attempts = attempt_count.load(Ordering::SeqCst);
    match result {
        Ok(metadata) => {
            log::debug!("Resolved {} after {} attempt(s)", address, attempts);
            stats.increment_info(if attempts > 1 {
                InfoType::ResolvedAfterRetry
            } else {
                InfoType::ResolvedFirstAttempt
            });
            LookupResult::Resolved(metadata)
        }
        Err(_) => {
            stats.increment_info(InfoType::AttemptsExhausted);
            LookupResult::Failed
        }
    }
}

/// Performs one attempt, bounded by `timeout`.
async fn attempt_lookup<S: LookupService>(
    service: &S,
    address: &str,
    timeout: Duration,
) -> Result<IpMetadata, LookupError> {
    let response = tokio::time::timeout(timeout, service.fetch(address))
        .await
        .map_err(|_| LookupError::Timeout(timeout))??;
    response.into_metadata()
}

fn report_failure(address: &str, attempt: usize, max_attempts: usize, error: &LookupError) {
    if error.is_logical() {
        log::warn!(
            "Failed lookup (attempt {}/{}) for {}: {}",
            attempt,
            max_attempts,
            address,
            error
        );
    } else {
        log::error!(
            "Request error (attempt {}/{}) for {}: {}",
            attempt,
            max_attempts,
            address,
            error
        );
    }
}
