//! Lookup data structures.
//!
//! This module defines the lookup service payload, the per-address result and
//! the retry policy shared by a batch.

use std::time::Duration;

use serde::Deserialize;

use crate::config::{
    API_STATUS_FAIL, ATTEMPT_TIMEOUT, MISSING_FIELD, RETRY_DELAY_SECS, RETRY_MAX_ATTEMPTS,
    SENTINEL_ERROR,
};
use crate::error_handling::LookupError;

/// JSON payload returned by the lookup service.
///
/// Every field is optional. A `status` of `"fail"` marks a logical failure;
/// any other value, or no `status` at all, is a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    /// `"success"` or `"fail"`
    pub status: Option<String>,
    /// Failure reason, only present when `status` is `"fail"`
    pub message: Option<String>,
    /// ASN and organization, e.g. `"AS15169 Google LLC"`
    #[serde(rename = "as")]
    pub asn: Option<String>,
    /// Internet service provider name
    pub isp: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Region or state name
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
}

impl ApiResponse {
    /// Returns true when the service reported that it could not resolve the address.
    pub fn is_fail(&self) -> bool {
        self.status.as_deref() == Some(API_STATUS_FAIL)
    }

    /// Classifies the payload.
    ///
    /// A failed status becomes `LookupError::Rejected` carrying the service
    /// message (or `"Unknown error"`); anything else becomes the four output
    /// fields with `"N/A"` substituted for absent ones.
    pub fn into_metadata(self) -> Result<IpMetadata, LookupError> {
        if self.is_fail() {
            return Err(LookupError::Rejected {
                message: self.message.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let or_missing = |field: Option<String>| field.unwrap_or_else(|| MISSING_FIELD.to_string());
        Ok(IpMetadata {
            asn: or_missing(self.asn),
            asn_name: or_missing(self.isp),
            country: or_missing(self.country),
            state: or_missing(self.region_name),
        })
    }
}

/// The four enrichment columns for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpMetadata {
    /// ASN identifier (`as` in the payload)
    pub asn: String,
    /// ASN/organization name (`isp` in the payload)
    pub asn_name: String,
    /// Country
    pub country: String,
    /// Region or state
    pub state: String,
}

impl IpMetadata {
    /// The record written for an address that could not be resolved.
    pub fn sentinel() -> Self {
        Self {
            asn: SENTINEL_ERROR.to_string(),
            asn_name: SENTINEL_ERROR.to_string(),
            country: SENTINEL_ERROR.to_string(),
            state: SENTINEL_ERROR.to_string(),
        }
    }

    /// Column values in output order: ASN, ASN Name, Country, State.
    pub fn columns(&self) -> [&str; 4] {
        [&self.asn, &self.asn_name, &self.country, &self.state]
    }
}

/// Outcome of looking up one address.
///
/// Failure is an ordinary value: `Failed` renders as the sentinel record, so
/// both variants have the same four-column shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The service resolved the address.
    Resolved(IpMetadata),
    /// Every attempt failed.
    Failed,
}

impl LookupResult {
    /// Returns true if the address was resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, LookupResult::Resolved(_))
    }

    /// Column values in output order, `"Error"` in every column for `Failed`.
    pub fn columns(&self) -> [&str; 4] {
        match self {
            LookupResult::Resolved(metadata) => metadata.columns(),
            LookupResult::Failed => [SENTINEL_ERROR; 4],
        }
    }

    /// Converts into the four-field record, the sentinel for `Failed`.
    pub fn into_metadata(self) -> IpMetadata {
        match self {
            LookupResult::Resolved(metadata) => metadata,
            LookupResult::Failed => IpMetadata::sentinel(),
        }
    }
}

/// Retry configuration shared read-only by every lookup in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, initial attempt included
    pub max_attempts: usize,
    /// Fixed wait between attempts
    pub delay: Duration,
    /// Upper bound on a single attempt
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            delay: Duration::from_secs(RETRY_DELAY_SECS),
            attempt_timeout: ATTEMPT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_success_payload() {
        let body = r#"{"status":"success","country":"United States","regionName":"Virginia","isp":"Google LLC","as":"AS15169 Google LLC"}"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");

        let metadata = response.into_metadata().expect("success payload");
        assert_eq!(
            metadata,
            IpMetadata {
                asn: "AS15169 Google LLC".to_string(),
                asn_name: "Google LLC".to_string(),
                country: "United States".to_string(),
                state: "Virginia".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_become_not_available() {
        let body = r#"{"status":"success","as":"AS13335 Cloudflare, Inc.","country":"Australia"}"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");

        let metadata = response.into_metadata().expect("success payload");
        assert_eq!(metadata.asn, "AS13335 Cloudflare, Inc.");
        assert_eq!(metadata.asn_name, "N/A");
        assert_eq!(metadata.country, "Australia");
        assert_eq!(metadata.state, "N/A");
    }

    #[test]
    fn test_missing_status_is_success() {
        let body = r#"{"as":"AS1","isp":"Example","country":"Nowhere","regionName":"Somewhere"}"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");

        assert!(!response.is_fail());
        assert!(response.into_metadata().is_ok());
    }

    #[test]
    fn test_empty_object_is_all_not_available() {
        let response: ApiResponse = serde_json::from_str("{}").expect("valid payload");
        let metadata = response.into_metadata().expect("success payload");
        assert_eq!(metadata.columns(), [MISSING_FIELD; 4]);
    }

    #[test]
    fn test_fail_status_is_rejected_with_message() {
        let body = r#"{"status":"fail","message":"reserved range"}"#;
        let response: ApiResponse = serde_json::from_str(body).expect("valid payload");

        match response.into_metadata() {
            Err(LookupError::Rejected { message }) => assert_eq!(message, "reserved range"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_status_without_message() {
        let response = ApiResponse {
            status: Some("fail".to_string()),
            ..Default::default()
        };
        match response.into_metadata() {
            Err(LookupError::Rejected { message }) => assert_eq!(message, "Unknown error"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_result_renders_sentinel() {
        assert_eq!(LookupResult::Failed.columns(), ["Error"; 4]);
        assert_eq!(LookupResult::Failed.into_metadata(), IpMetadata::sentinel());
        assert!(!LookupResult::Failed.is_resolved());
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(2));
        assert_eq!(policy.attempt_timeout, Duration::from_secs(5));
    }
}
