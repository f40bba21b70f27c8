//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ATTEMPT_TIMEOUT_SECS, DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_USER_AGENT,
    LOG_TO_TERMINAL, RETRY_DELAY_SECS, RETRY_MAX_ATTEMPTS,
};
use crate::lookup::RetryPolicy;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// All options have defaults and can be constructed programmatically with
/// `..Default::default()`.
///
/// # Examples
///
/// ```bash
/// # Prompt for input and output paths
/// ip_enrich
///
/// # Non-interactive
/// ip_enrich addresses.xlsx enriched.xlsx --max-attempts 5
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_enrich",
    version,
    about = "Adds ASN, ASN name, country and state columns to a spreadsheet of IP addresses."
)]
pub struct Config {
    /// Spreadsheet with IP addresses in its first column (.xlsx, .xls, .ods or .csv)
    #[arg(value_parser)]
    pub input: Option<PathBuf>,

    /// Path of the enriched spreadsheet to write (.xlsx or .csv)
    #[arg(value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Diagnostic log file (appended to), or `-` to log to the terminal
    #[arg(long, value_parser, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Maximum lookup attempts per address
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Delay between attempts in seconds
    #[arg(long, default_value_t = RETRY_DELAY_SECS)]
    pub retry_delay_secs: u64,

    /// Per-attempt timeout in seconds
    #[arg(long, default_value_t = ATTEMPT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Base URL of the lookup service
    #[arg(long, env = "IP_ENRICH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// Returns true when diagnostics go to the terminal instead of a file.
    pub fn logs_to_terminal(&self) -> bool {
        self.log_file.as_os_str() == LOG_TO_TERMINAL
    }

    /// Builds the retry policy shared by every lookup in a batch.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_secs(self.retry_delay_secs),
            attempt_timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            log_level: LogLevel::Debug,
            log_format: LogFormat::Plain,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            max_attempts: RETRY_MAX_ATTEMPTS,
            retry_delay_secs: RETRY_DELAY_SECS,
            timeout_seconds: ATTEMPT_TIMEOUT_SECS,
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_cli_defaults() {
        let parsed = Config::parse_from(["ip_enrich"]);
        let default = Config::default();

        assert_eq!(parsed.input, default.input);
        assert_eq!(parsed.output, default.output);
        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(parsed.log_file, default.log_file);
        assert_eq!(parsed.max_attempts, default.max_attempts);
        assert_eq!(parsed.retry_delay_secs, default.retry_delay_secs);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert_eq!(parsed.user_agent, default.user_agent);
    }

    #[test]
    fn test_config_positional_paths() {
        let config = Config::parse_from(["ip_enrich", "in.xlsx", "out.xlsx"]);
        assert_eq!(config.input, Some(PathBuf::from("in.xlsx")));
        assert_eq!(config.output, Some(PathBuf::from("out.xlsx")));
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = Config {
            max_attempts: 5,
            retry_delay_secs: 1,
            timeout_seconds: 7,
            ..Default::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.attempt_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_default_retry_policy_matches_constants() {
        assert_eq!(Config::default().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_logs_to_terminal() {
        assert!(!Config::default().logs_to_terminal());
        assert!(Config::parse_from(["ip_enrich", "--log-file", "-"]).logs_to_terminal());
        assert!(!Config::parse_from(["ip_enrich", "--log-file", "-.log"]).logs_to_terminal());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }
}
