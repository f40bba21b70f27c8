//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom
//! formatting, either on the terminal or appended to a diagnostic log file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Builds an `env_logger` builder with the level filters shared by both outputs.
///
/// The builder reads `RUST_LOG` first; `level` overrides it for this crate and
/// as the default. HTTP stack internals are capped at `Info`.
fn base_builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("ip_enrich", level);
    builder
}

fn json_line(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

/// Initializes the terminal logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ip_enrich=debug,reqwest=info ip_enrich ips.xlsx out.xlsx
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = base_builder(level);

    match format {
        LogFormat::Json => {
            builder.format(json_line);
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Initializes a logger that appends to `path`.
///
/// This is the diagnostic sink for a run: every failed lookup attempt is
/// recorded here with its address and attempt number. Plain lines are
/// `<timestamp> - <LEVEL> - <message>`; JSON lines carry the same fields.
/// The file is created if missing and never truncated.
///
/// # Errors
///
/// Returns `InitializationError::LoggerSetupError` if the file cannot be
/// opened, or `InitializationError::LoggerError` if a logger is already
/// installed.
pub fn init_logger_to_file(
    path: &Path,
    level: LevelFilter,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            InitializationError::LoggerSetupError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

    let mut builder = base_builder(level);
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    builder.write_style(env_logger::WriteStyle::Never);

    match format {
        LogFormat::Json => {
            builder.format(json_line);
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} - {} - {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                    record.level(),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
