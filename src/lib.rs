//! ip_enrich library: ASN and geolocation enrichment for lists of IP addresses
//!
//! This library looks up every address of a spreadsheet against an IP metadata
//! service concurrently, retries failed lookups with a fixed delay, and writes
//! the input back out with four added columns: ASN, ASN Name, Country and
//! State. Addresses that cannot be resolved get `"Error"` in every column.
//!
//! # Example
//!
//! ```no_run
//! use ip_enrich::{Config, run_enrichment};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: Some(PathBuf::from("ips.xlsx")),
//!     output: Some(PathBuf::from("ips_enriched.xlsx")),
//!     ..Default::default()
//! };
//!
//! let report = run_enrichment(config).await?;
//! println!("Resolved {} of {} addresses", report.resolved, report.total_addresses);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime with the time driver enabled.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod spreadsheet;

// Re-export public API
pub use app::{prompt_path, prompt_path_from};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError, SpreadsheetError};
pub use lookup::{IpMetadata, LookupResult, RetryPolicy};
pub use run::{enrich_addresses, run_enrichment, EnrichmentReport};

// Internal run module (wires configuration, lookups and spreadsheet I/O)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{log_progress, print_error_statistics, print_simple_summary};
    use crate::config::Config;
    use crate::error_handling::{InitializationError, ProcessingStats};
    use crate::initialization::init_client;
    use crate::lookup::{run_batch, HttpLookupService, LookupResult};
    use crate::spreadsheet::{read_input, validate_output_path, write_output};

    /// Results of an enrichment run.
    #[derive(Debug, Clone)]
    pub struct EnrichmentReport {
        /// Number of addresses looked up (blank rows excluded)
        pub total_addresses: usize,
        /// Number of addresses the service resolved
        pub resolved: usize,
        /// Number of addresses written with the `"Error"` sentinel
        pub failed: usize,
        /// Path of the written spreadsheet
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Looks up `addresses` against the configured service.
    ///
    /// Builds the shared HTTP client, then runs every lookup concurrently.
    /// The returned vector is index-aligned with `addresses`.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be created. Individual lookup
    /// failures are returned as `LookupResult::Failed`.
    pub async fn enrich_addresses<A: AsRef<str>>(
        addresses: &[A],
        config: &Config,
        stats: &ProcessingStats,
    ) -> Result<Vec<LookupResult>, InitializationError> {
        let client = init_client(config)?;
        let service = HttpLookupService::new(client, config.api_url.as_str());
        let policy = config.retry_policy();

        info!(
            "Looking up {} addresses (max {} attempts, {}s delay, {}s timeout)",
            addresses.len(),
            policy.max_attempts,
            policy.delay.as_secs(),
            policy.attempt_timeout.as_secs()
        );
        Ok(run_batch(&service, addresses, &policy, stats).await)
    }

    /// Runs an enrichment with the provided configuration.
    ///
    /// Reads the input spreadsheet, looks up every address, and writes the
    /// enriched spreadsheet. The output is written only after every lookup
    /// has finished; a fatal error leaves no output file behind.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `config.input` or `config.output` is missing
    /// - The output path does not end in `.xlsx` or `.csv`
    /// - The input file is missing or unreadable
    /// - The HTTP client cannot be initialized
    /// - The output file cannot be written
    pub async fn run_enrichment(config: Config) -> Result<EnrichmentReport> {
        let input = config
            .input
            .clone()
            .context("No input spreadsheet given")?;
        let output = config.output.clone().context("No output path given")?;

        let format = validate_output_path(&output)?;
        let sheet = read_input(&input).context("Failed to read input spreadsheet")?;

        let addresses = sheet.addresses();
        let stats = ProcessingStats::new();
        let start_time = Instant::now();

        let results = enrich_addresses(&addresses, &config, &stats)
            .await
            .context("Failed to initialize lookups")?;
        log_progress(start_time, results.len());

        write_output(&output, format, &sheet, &results)
            .context("Failed to write output spreadsheet")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let resolved = results.iter().filter(|r| r.is_resolved()).count();
        let failed = results.len() - resolved;

        print_error_statistics(&stats);
        print_simple_summary(results.len(), resolved, failed, elapsed_seconds);

        Ok(EnrichmentReport {
            total_addresses: results.len(),
            resolved,
            failed,
            output_path: output,
            elapsed_seconds,
        })
    }
}
