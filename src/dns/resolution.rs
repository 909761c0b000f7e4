//! Forward and reverse resolution.
//!
//! This module defines the `Resolver` seam the prober depends on, and the
//! hickory-backed `SystemResolver` used in production.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;
use crate::initialization::init_resolver;

/// Forward and reverse DNS, as consumed by the prober.
///
/// Timeouts are applied by the caller, so implementations may simply await
/// their underlying lookups.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves `domain` to its addresses, in the order the resolver returned them.
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, ResolutionError>;

    /// Returns the PTR name for `address`.
    async fn reverse_lookup(&self, address: IpAddr) -> Result<String, ResolutionError>;
}

/// Resolver backed by the system DNS configuration.
#[derive(Clone)]
pub struct SystemResolver {
    inner: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an existing hickory resolver.
    pub fn new(inner: Arc<TokioAsyncResolver>) -> Self {
        Self { inner }
    }

    /// Builds a resolver from the system configuration, with per-query `timeout`.
    pub fn from_system_conf(timeout: Duration) -> Self {
        Self::new(init_resolver(timeout))
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, ResolutionError> {
        let response =
            self.inner
                .lookup_ip(domain)
                .await
                .map_err(|e| ResolutionError::Lookup {
                    host: domain.to_string(),
                    reason: e.to_string(),
                })?;

        let addresses: Vec<IpAddr> = response.iter().collect();
        if addresses.is_empty() {
            return Err(ResolutionError::NoAddresses {
                host: domain.to_string(),
            });
        }
        Ok(addresses)
    }

    async fn reverse_lookup(&self, address: IpAddr) -> Result<String, ResolutionError> {
        let response =
            self.inner
                .reverse_lookup(address)
                .await
                .map_err(|e| ResolutionError::Lookup {
                    host: address.to_string(),
                    reason: e.to_string(),
                })?;

        response
            .iter()
            .map(|name| normalize_ptr_name(&name.to_utf8()))
            .find(|name| !name.is_empty())
            .ok_or_else(|| ResolutionError::NoAddresses {
                host: address.to_string(),
            })
    }
}

/// Strips the trailing root label from a fully-qualified PTR name.
///
/// `host.example.com.` becomes `host.example.com`.
pub fn normalize_ptr_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}
