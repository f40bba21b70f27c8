//! Configuration constants.
//!
//! This module defines the constants used throughout the application, including
//! the lookup service endpoint, retry defaults and spreadsheet column names.

use std::time::Duration;

// Lookup service
/// Base URL of the lookup service. The address is appended as a path segment.
pub const DEFAULT_API_URL: &str = "http://ip-api.com/json";

/// Fields requested from the lookup service on every query.
pub const API_FIELDS: &str = "status,message,as,isp,country,regionName";

/// Value of the payload `status` field when the service could not resolve an address.
pub const API_STATUS_FAIL: &str = "fail";

/// User-Agent sent with lookup requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_enrich/", env!("CARGO_PKG_VERSION"));

// Retry strategy
/// Maximum number of attempts per address (initial attempt included)
pub const RETRY_MAX_ATTEMPTS: usize = 3;
/// Fixed delay between attempts in seconds
pub const RETRY_DELAY_SECS: u64 = 2;
/// Per-attempt timeout in seconds
pub const ATTEMPT_TIMEOUT_SECS: u64 = 5;

/// Per-attempt timeout as a `Duration`.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(ATTEMPT_TIMEOUT_SECS);

// Result values
/// Written to every result column when an address could not be resolved
pub const SENTINEL_ERROR: &str = "Error";
/// Written to a result column the service left out of a successful response
pub const MISSING_FIELD: &str = "N/A";

// Spreadsheet layout
/// Header of the address column in the output sheet
pub const COLUMN_IP: &str = "IP";
/// Header of the ASN column
pub const COLUMN_ASN: &str = "ASN";
/// Header of the ASN/organization name column
pub const COLUMN_ASN_NAME: &str = "ASN Name";
/// Header of the country column
pub const COLUMN_COUNTRY: &str = "Country";
/// Header of the region/state column
pub const COLUMN_STATE: &str = "State";

/// Header row of the output sheet, in column order.
pub const OUTPUT_HEADERS: [&str; 5] = [
    COLUMN_IP,
    COLUMN_ASN,
    COLUMN_ASN_NAME,
    COLUMN_COUNTRY,
    COLUMN_STATE,
];

/// Default path of the diagnostic log file.
pub const DEFAULT_LOG_FILE: &str = "error.log";

/// `--log-file` value that sends diagnostics to the terminal instead of a file.
pub const LOG_TO_TERMINAL: &str = "-";
