//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories per-address failures are counted under.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(String),
}

/// Forward resolution failed; no addresses are known, so the sweep cannot run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The resolver returned an error.
    #[error("failed to resolve {host}: {reason}")]
    Lookup { host: String, reason: String },

    /// The resolver answered, but with no addresses.
    #[error("no addresses found for {host}")]
    NoAddresses { host: String },

    /// The lookup did not complete within the per-operation timeout.
    #[error("resolution of {host} timed out after {timeout_ms}ms")]
    Timeout { host: String, timeout_ms: u64 },
}

/// Step of the probe routine an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProbePhase {
    Connect,
    Handshake,
    Write,
    Read,
}

/// Failure of a single TLS/HTTP probe.
///
/// These never escape the per-address boundary; the orchestrator converts them
/// into `ProbeResult::error`.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A bounded operation exceeded its deadline.
    #[error("timeout: {phase} did not complete within {timeout_ms}ms")]
    Timeout { phase: ProbePhase, timeout_ms: u64 },

    /// Handshake or certificate validation failure.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Any other transport failure.
    #[error("I/O error during {phase}: {source}")]
    Io {
        phase: ProbePhase,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Category this error is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ProbeError::Timeout { .. } => ErrorType::Timeout,
            ProbeError::Tls(_) => ErrorType::Tls,
            ProbeError::Io { .. } => ErrorType::Io,
        }
    }
}

/// Categories of per-address failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
pub enum ErrorType {
    /// Connect, handshake, write or read exceeded the timeout
    Timeout,
    /// TLS handshake or certificate validation failed
    Tls,
    /// Connection refused, reset, or another transport error
    Io,
    /// The probe task for the address panicked
    Panic,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Timeout => "Timeout",
            ErrorType::Tls => "TLS error",
            ErrorType::Io => "I/O error",
            ErrorType::Panic => "Probe task panicked",
        }
    }
}
