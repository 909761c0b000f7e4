//! Per-address probe result.

use std::net::IpAddr;
use std::time::Duration;

use serde::Serialize;

use crate::config::{HTTP_VERSION_PREFIX, NO_PTR};
use crate::error_handling::{ErrorType, ProbeError};

/// Outcome of probing one resolved address.
///
/// A result is a success when `error` is empty; `status_line` is then
/// non-empty (possibly the `"(no response)"` sentinel). A failed result has a
/// non-empty `error` and an empty `status_line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Address that was probed
    pub address: IpAddr,
    /// PTR name, or `"(no PTR)"` when the reverse lookup failed
    pub reverse_name: String,
    /// `https://` URL built from the PTR name, or from the address literal
    pub display_url: String,
    /// First line of the HTTP response
    pub status_line: String,
    /// Status code token of `status_line`, when it is an HTTP status line
    pub status_code: String,
    /// Time from probe start to the first response byte, or to the failure
    pub elapsed_ms: u64,
    /// Failure description
    pub error: String,
    /// Failure category
    pub error_type: Option<ErrorType>,
}

impl ProbeResult {
    /// A fresh result for `address`, before any lookup has run.
    pub fn new(address: IpAddr) -> Self {
        Self {
            address,
            reverse_name: NO_PTR.to_string(),
            display_url: build_display_url(address, None),
            status_line: String::new(),
            status_code: String::new(),
            elapsed_ms: 0,
            error: String::new(),
            error_type: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    /// Records the reverse lookup outcome and rebuilds `display_url`.
    pub fn set_reverse_name(&mut self, name: Option<String>) {
        match name.filter(|n| !n.is_empty() && n != NO_PTR) {
            Some(name) => {
                self.display_url = build_display_url(self.address, Some(&name));
                self.reverse_name = name;
            }
            None => {
                self.reverse_name = NO_PTR.to_string();
                self.display_url = build_display_url(self.address, None);
            }
        }
    }

    pub fn record_success(&mut self, status_line: String, elapsed: Duration) {
        self.status_code = parse_status_code(&status_line);
        self.status_line = status_line;
        self.elapsed_ms = elapsed.as_millis() as u64;
        self.error.clear();
        self.error_type = None;
    }

    pub fn record_failure(&mut self, error: &ProbeError, elapsed: Duration) {
        self.fail(error.to_string(), error.error_type());
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// Records a probe task that died before producing a result.
    pub fn record_panic(&mut self, message: String) {
        self.fail(message, ErrorType::Panic);
    }

    fn fail(&mut self, message: String, error_type: ErrorType) {
        self.status_line.clear();
        self.status_code.clear();
        self.error = if message.is_empty() {
            error_type.as_str().to_string()
        } else {
            message
        };
        self.error_type = Some(error_type);
    }
}

/// Builds the URL shown for an address.
///
/// Prefers the PTR name. Without one, the address literal is used, with IPv6
/// literals bracketed.
pub fn build_display_url(address: IpAddr, reverse_name: Option<&str>) -> String {
    match (reverse_name, address) {
        (Some(name), _) => format!("https://{name}"),
        (None, IpAddr::V4(v4)) => format!("https://{v4}"),
        (None, IpAddr::V6(v6)) => format!("https://[{v6}]"),
    }
}

/// Extracts the status code from a status line.
///
/// When the first whitespace-delimited token starts with `HTTP/`, the second
/// token is returned as-is (not validated as numeric). Otherwise empty.
pub fn parse_status_code(status_line: &str) -> String {
    let mut tokens = status_line.split_whitespace();
    match tokens.next() {
        Some(version) if version.starts_with(HTTP_VERSION_PREFIX) => {
            tokens.next().unwrap_or_default().to_string()
        }
        _ => String::new(),
    }
}
