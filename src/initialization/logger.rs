//! Logger initialization.

use std::io::{self, Write};

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency targets capped below the requested level.
///
/// hickory retries truncated or malformed UDP answers internally, so its
/// protocol warnings are noise for a probe run.
const QUIET_TARGETS: &[(&str, LevelFilter)] = &[
    ("hickory_proto", LevelFilter::Error),
    ("hickory_resolver", LevelFilter::Warn),
    ("rustls", LevelFilter::Warn),
];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// global default. Logs go to stderr so that stdout carries only results.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-step probe logging
/// domain_probe example.com --log-level debug
///
/// # Machine-readable logs alongside JSON results
/// domain_probe example.com --format json --log-format json 2>probe.log
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (target, cap) in QUIET_TARGETS {
        builder.filter_module(target, level.min(*cap));
    }
    builder.filter_module("domain_probe", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().to_string(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let (marker, label) = match record.level() {
        Level::Error => ("❌", "ERROR".red()),
        Level::Warn => ("⚠️", "WARN".yellow()),
        Level::Info => ("✔️", "INFO".green()),
        Level::Debug => ("🔍", "DEBUG".blue()),
        Level::Trace => ("🔬", "TRACE".purple()),
    };
    writeln!(
        buf,
        "{marker} {} [{label}] {}",
        record.target().cyan(),
        record.args()
    )
}
