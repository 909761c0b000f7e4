//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, resolution, per-address probe errors)
//! - Categorization of transport errors into probe error variants
//!
//! Only `ResolutionError` propagates out of a sweep. Probe errors are converted
//! into data on the per-address result.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_handshake_error, categorize_io_error};
pub use types::{ErrorType, InitializationError, ProbeError, ProbePhase, ResolutionError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_strings_are_distinct() {
        let names: Vec<&str> = ErrorType::iter().map(|t| t.as_str()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!name.is_empty());
            assert!(!names[i + 1..].contains(name), "duplicate label {name}");
        }
    }

    #[test]
    fn test_probe_error_messages_distinguish_kinds() {
        let timeout = ProbeError::Timeout {
            phase: ProbePhase::Connect,
            timeout_ms: 2000,
        };
        let tls = ProbeError::Tls("invalid peer certificate: Expired".to_string());
        let io = ProbeError::Io {
            phase: ProbePhase::Connect,
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };

        assert!(timeout.to_string().contains("timeout"));
        assert!(timeout.to_string().contains("2000ms"));
        assert!(tls.to_string().starts_with("TLS error"));
        assert!(tls.to_string().contains("Expired"));
        assert!(io.to_string().starts_with("I/O error during connect"));

        assert_eq!(timeout.error_type(), ErrorType::Timeout);
        assert_eq!(tls.error_type(), ErrorType::Tls);
        assert_eq!(io.error_type(), ErrorType::Io);
    }

    #[test]
    fn test_resolution_error_messages() {
        let err = ResolutionError::NoAddresses {
            host: "example.com".to_string(),
        };
        assert_eq!(err.to_string(), "no addresses found for example.com");

        let err = ResolutionError::Timeout {
            host: "example.com".to_string(),
            timeout_ms: 100,
        };
        assert!(err.to_string().contains("timed out after 100ms"));
    }
}
