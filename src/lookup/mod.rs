//! IP metadata lookup.
//!
//! This module provides:
//! - The lookup service abstraction and its HTTP implementation
//! - Single-address lookup with fixed-delay retries
//! - Concurrent, order-preserving batch lookup
//!
//! Failed lookups never surface as errors: they produce
//! `LookupResult::Failed`, which renders as `"Error"` in every column.

mod batch;
mod client;
mod service;
#[cfg(test)]
mod test_support;
mod types;

// Re-export public API
pub use batch::run_batch;
pub use client::lookup;
pub use service::{HttpLookupService, LookupService};
pub use types::{ApiResponse, IpMetadata, LookupResult, RetryPolicy};
