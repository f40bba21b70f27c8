//! Tests for the diagnostic log file
//!
//! The logger is process-global, so this file holds a single test that owns it.

use ip_enrich::error_handling::ProcessingStats;
use ip_enrich::initialization::init_logger_to_file;
use ip_enrich::lookup::{lookup, HttpLookupService, LookupResult, RetryPolicy};
use ip_enrich::LogFormat;
use log::LevelFilter;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Splits `<timestamp> - <LEVEL> - <message>` into its parts.
fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.splitn(3, " - ");
    Some((parts.next()?, parts.next()?, parts.next()?))
}

#[tokio::test]
async fn test_failed_attempts_are_logged_with_level_and_attempt() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let log_path = dir.path().join("error.log");
    std::fs::write(&log_path, "earlier run\n").expect("Failed to seed log file");

    init_logger_to_file(&log_path, LevelFilter::Warn, LogFormat::Plain)
        .expect("logger should initialize");

    let server = MockServer::start().await;
    // Mounted first, so it answers the first request only
    Mock::given(method("GET"))
        .and(path("/json/10.0.0.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "fail", "message": "private range"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/10.0.0.1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client");
    let service = HttpLookupService::new(Arc::new(client), format!("{}/json", server.uri()));
    let policy = RetryPolicy {
        max_attempts: 2,
        delay: Duration::from_millis(10),
        attempt_timeout: Duration::from_secs(2),
    };
    let stats = ProcessingStats::new();

    let result = lookup(&service, "10.0.0.1", &policy, &stats).await;
    assert_eq!(result, LookupResult::Failed);
    log::logger().flush();

    let contents = std::fs::read_to_string(&log_path).expect("log file should exist");
    let mut lines = contents.lines();

    // Appended, never truncated
    assert_eq!(lines.next(), Some("earlier run"));

    let entries: Vec<(&str, &str, &str)> = lines.filter_map(parse_line).collect();
    for (timestamp, _, _) in &entries {
        assert!(
            chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp: {}",
            timestamp
        );
    }

    let warning = entries
        .iter()
        .find(|(_, _, message)| message.starts_with("Failed lookup"))
        .expect("logical failure should be logged");
    assert_eq!(warning.1, "WARN");
    assert_eq!(
        warning.2,
        "Failed lookup (attempt 1/2) for 10.0.0.1: private range"
    );

    let error = entries
        .iter()
        .find(|(_, _, message)| message.starts_with("Request error"))
        .expect("transport failure should be logged");
    assert_eq!(error.1, "ERROR");
    assert!(
        error.2.starts_with("Request error (attempt 2/2) for 10.0.0.1: "),
        "unexpected message: {}",
        error.2
    );
    assert!(error.2.contains("503"), "unexpected message: {}", error.2);
}
