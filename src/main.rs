//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_enrich` library that handles:
//! - Command-line argument parsing and interactive prompts
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process;

use ip_enrich::initialization::{init_logger_to_file, init_logger_with};
use ip_enrich::spreadsheet::validate_output_path;
use ip_enrich::{prompt_path, run_enrichment, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), current
    // directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let mut config = Config::parse();

    let logger = if config.logs_to_terminal() {
        init_logger_with(config.log_level.clone().into(), config.log_format.clone())
    } else {
        init_logger_to_file(
            &config.log_file,
            config.log_level.clone().into(),
            config.log_format.clone(),
        )
    };
    logger.context("Failed to initialize logger")?;

    let input = match config.input.take() {
        Some(path) => path,
        None => prompt_path("Enter the full path to the spreadsheet: ")
            .context("Failed to read input path")?,
    };
    if !input.exists() {
        eprintln!("Error: File not found: {}", input.display());
        process::exit(1);
    }

    let output = match config.output.take() {
        Some(path) => path,
        None => prompt_path("Enter the full path to save the updated spreadsheet: ")
            .context("Failed to read output path")?,
    };
    if validate_output_path(&output).is_err() {
        eprintln!("Error: Output file must be an .xlsx or .csv file");
        process::exit(1);
    }

    config.input = Some(input);
    config.output = Some(output);
    let log_file = (!config.logs_to_terminal()).then(|| config.log_file.clone());

    match run_enrichment(config).await {
        Ok(report) => {
            log::logger().flush();
            println!(
                "Looked up {} address{} ({} resolved, {} failed) in {:.1}s",
                report.total_addresses,
                if report.total_addresses == 1 { "" } else { "es" },
                report.resolved,
                report.failed,
                report.elapsed_seconds
            );
            println!(
                "Spreadsheet saved successfully at {}",
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Error processing file: {:#}", e);
            log::logger().flush();
            report_fatal(&e, log_file.as_deref());
            process::exit(1);
        }
    }
}

fn report_fatal(error: &anyhow::Error, log_file: Option<&Path>) {
    eprintln!("ip_enrich error: {:#}", error);
    if let Some(log_file) = log_file {
        eprintln!(
            "An error occurred. Check {} for details.",
            log_file.display()
        );
    }
}
