//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::warn;

/// Initializes the DNS resolver used for forward and reverse lookups.
///
/// Uses the system configuration (`/etc/resolv.conf` or the platform
/// equivalent), falling back to the resolver's built-in defaults when the
/// system configuration cannot be read. Query timeout and attempt count are
/// overridden so that a single lookup stays within `timeout`.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = crate::config::DNS_ATTEMPTS;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
