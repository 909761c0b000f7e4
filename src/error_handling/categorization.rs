//! Error categorization.
//!
//! Maps the `std::io::Error` values surfaced by tokio and tokio-rustls onto
//! `ProbeError` variants, so timeouts, TLS failures and plain transport
//! failures stay distinguishable in results.

use std::io::{Error as IoError, ErrorKind};

use super::types::{ProbeError, ProbePhase};

/// Categorizes an I/O error raised during the TLS handshake.
///
/// tokio-rustls reports every rustls failure (alerts, certificate rejection,
/// malformed records) as an `io::Error` wrapping the `rustls::Error`. Those,
/// and peers that hang up mid-handshake, are TLS failures. Anything else
/// (reset, broken pipe) is a transport failure.
pub fn categorize_handshake_error(error: IoError) -> ProbeError {
    if let Some(tls_error) = error
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<rustls::Error>())
    {
        return ProbeError::Tls(tls_error.to_string());
    }

    match error.kind() {
        ErrorKind::InvalidData => ProbeError::Tls(error.to_string()),
        ErrorKind::UnexpectedEof => {
            ProbeError::Tls("peer closed connection during handshake".to_string())
        }
        _ => ProbeError::Io {
            phase: ProbePhase::Handshake,
            source: error,
        },
    }
}

/// Categorizes an I/O error outside the handshake.
///
/// A rustls error can still surface after the handshake (bad record MAC, fatal
/// alert), and is kept as a TLS failure.
pub fn categorize_io_error(phase: ProbePhase, error: IoError) -> ProbeError {
    if let Some(tls_error) = error
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<rustls::Error>())
    {
        return ProbeError::Tls(tls_error.to_string());
    }
    ProbeError::Io {
        phase,
        source: error,
    }
}
