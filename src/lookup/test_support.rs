//! Scripted lookup services for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::error_handling::LookupError;

use super::service::LookupService;
use super::types::ApiResponse;

/// What the scripted service does for one attempt.
#[derive(Debug, Clone)]
pub enum Step {
    /// Answer immediately with the payload
    Respond(ApiResponse),
    /// Answer with the payload after the given delay
    RespondAfter(Duration, ApiResponse),
    /// Answer with a failed status and message
    Reject(&'static str),
    /// Fail with a transport error
    Transport,
    /// Never answer
    Hang,
}

/// A `LookupService` that replays a per-address script of steps.
///
/// Addresses with no remaining steps are rejected.
#[derive(Default)]
pub struct ScriptedService {
    scripts: Mutex<HashMap<String, VecDeque<Step>>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, address: &str, steps: Vec<Step>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(address.to_string(), steps.into());
        self
    }

    pub fn calls(&self, address: &str) -> usize {
        self.calls.lock().unwrap().get(address).copied().unwrap_or(0)
    }
}

impl LookupService for ScriptedService {
    async fn fetch(&self, address: &str) -> Result<ApiResponse, LookupError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(address.to_string())
            .or_insert(0) += 1;
        let step = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(address)
            .and_then(|steps| steps.pop_front());

        match step {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::RespondAfter(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            Some(Step::Reject(message)) => Ok(rejected(message)),
            Some(Step::Transport) => Err(transport_error()),
            Some(Step::Hang) => std::future::pending().await,
            None => Ok(rejected("script exhausted")),
        }
    }
}

/// A successful payload with all four fields present.
pub fn success(asn: &str, isp: &str, country: &str, region: &str) -> ApiResponse {
    ApiResponse {
        status: Some("success".to_string()),
        message: None,
        asn: Some(asn.to_string()),
        isp: Some(isp.to_string()),
        country: Some(country.to_string()),
        region_name: Some(region.to_string()),
    }
}

/// A payload with a failed status.
pub fn rejected(message: &str) -> ApiResponse {
    ApiResponse {
        status: Some("fail".to_string()),
        message: Some(message.to_string()),
        ..Default::default()
    }
}

/// A real `reqwest` error, produced without touching the network.
pub fn transport_error() -> LookupError {
    let error = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("invalid URL should fail to build");
    LookupError::Http(error)
}
