//! Lookup service abstraction and its HTTP implementation.

use std::future::Future;
use std::sync::Arc;

use crate::config::API_FIELDS;
use crate::error_handling::LookupError;

use super::types::ApiResponse;

/// A source of IP metadata.
///
/// One call is one attempt: implementations do not retry, and report
/// transport failures as `Err`. Logical failures come back as an `Ok`
/// payload with a failed status.
pub trait LookupService {
    /// Queries metadata for a single address.
    fn fetch(&self, address: &str) -> impl Future<Output = Result<ApiResponse, LookupError>> + Send;
}

/// Queries the lookup service over HTTP.
///
/// The client is shared by every lookup in a batch; the service itself holds
/// no per-address state.
#[derive(Debug, Clone)]
pub struct HttpLookupService {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl HttpLookupService {
    /// Creates a service that sends requests to `base_url` through `client`.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builds the request URL for an address.
    pub fn request_url(&self, address: &str) -> String {
        format!("{}/{}?fields={}", self.base_url, address, API_FIELDS)
    }
}

impl LookupService for HttpLookupService {
    async fn fetch(&self, address: &str) -> Result<ApiResponse, LookupError> {
        let response = self
            .client
            .get(self.request_url(address))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<ApiResponse>().await?)
    }
}
