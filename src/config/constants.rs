//! Configuration constants.
//!
//! This module defines the constants used throughout the probe pipeline,
//! including timeouts, ports, buffer sizes and the sentinel values written
//! into results.

/// Default per-operation timeout in milliseconds.
///
/// Applied fresh to every network operation of every address: forward resolve,
/// reverse resolve, TCP connect, TLS handshake, request write and response read.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Port probed on every resolved address.
pub const HTTPS_PORT: u16 = 443;

/// Size of the single read performed after the request is written (4KB).
/// Only the status line is consulted, so anything beyond this is discarded.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Default number of addresses probed at the same time.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Number of attempts the system resolver makes per query.
/// Kept low so the per-operation timeout stays meaningful.
pub const DNS_ATTEMPTS: usize = 2;

/// Reverse name recorded when the PTR lookup fails.
pub const NO_PTR: &str = "(no PTR)";

/// Status line recorded when the peer closes without sending any bytes.
pub const NO_RESPONSE: &str = "(no response)";

/// Status line recorded when the response starts with an empty line.
pub const EMPTY_STATUS_LINE: &str = "(empty status line)";

/// Prefix identifying an HTTP status line.
pub const HTTP_VERSION_PREFIX: &str = "HTTP/";
