//! Concurrent batch lookup.

use futures::stream::FuturesUnordered;
use futures::StreamExt;

use crate::error_handling::ProcessingStats;

use super::client::lookup;
use super::service::LookupService;
use super::types::{LookupResult, RetryPolicy};

/// Looks up every address concurrently and returns the results in input order.
///
/// One lookup future is created per address, each tagged with its index, and
/// all of them are polled together on the calling task. There is no
/// concurrency limit. Results are written to the slot of their index as they
/// complete, so `results[i]` is always the outcome for `addresses[i]`.
///
/// Individual failures are already absorbed into `LookupResult::Failed` by
/// [`lookup`], so this function cannot fail.
pub async fn run_batch<S, A>(
    service: &S,
    addresses: &[A],
    policy: &RetryPolicy,
    stats: &ProcessingStats,
) -> Vec<LookupResult>
where
    S: LookupService,
    A: AsRef<str>,
{
    let mut tasks: FuturesUnordered<_> = addresses
        .iter()
        .enumerate()
        .map(|(index, address)| async move {
            let result = lookup(service, address.as_ref(), policy, stats).await;
            (index, result)
        })
        .collect();

    let mut slots: Vec<Option<LookupResult>> = vec![None; addresses.len()];
    while let Some((index, result)) = tasks.next().await {
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .map(|slot| slot.unwrap_or(LookupResult::Failed))
        .collect()
}
