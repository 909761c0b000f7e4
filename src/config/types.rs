//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::constants::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_MS, HTTPS_PORT};

/// Verbosity of the diagnostic log (stderr), independent of result output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    /// Per-address failures and resolver fallbacks (default)
    Warn,
    /// Sweep start and end
    Info,
    /// Every probe step
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Diagnostic log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Coloured, one line per record
    Plain,
    /// One JSON object per record
    Json,
}

/// How probe results are printed on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per address
    Plain,
    /// One JSON object per address
    Json,
}

/// Sweep configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// through `Default`.
///
/// # Examples
///
/// ```no_run
/// use domain_probe::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     timeout_ms: 2000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_probe",
    version,
    about = "Resolve a domain and probe every backend address over TLS"
)]
pub struct Config {
    /// Domain to resolve and probe (also used as SNI and Host header)
    pub domain: String,

    /// Per-operation timeout in milliseconds
    #[arg(
        long,
        env = "DOMAIN_PROBE_TIMEOUT_MS",
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    /// Port to probe on every address
    #[arg(long, default_value_t = HTTPS_PORT)]
    pub port: u16,

    /// Maximum number of addresses probed at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Also print the fastest successful responder
    #[arg(long)]
    pub fastest: bool,

    /// Result output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Per-operation timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            port: HTTPS_PORT,
            concurrency: DEFAULT_CONCURRENCY,
            fastest: false,
            format: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
