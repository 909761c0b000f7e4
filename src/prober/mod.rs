//! Per-address probing engine.
//!
//! A sweep resolves a domain, then for every address (in resolver order):
//! reverse lookup, display URL, TLS/HTTP probe, timing. Each address is probed
//! in its own task, so a failure or panic for one address is recorded on its
//! result and never affects the others.
//!
//! Probes fan out up to a concurrency limit; results are still returned in
//! resolution order.

mod result;
mod summary;

use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::config::{Config, DEFAULT_CONCURRENCY, HTTPS_PORT};
use crate::dns::{Resolver, SystemResolver};
use crate::error_handling::{InitializationError, ResolutionError};
use crate::tls::{HttpsProbe, TlsProbe};

pub use result::{build_display_url, parse_status_code, ProbeResult};
pub use summary::SweepSummary;

/// Probes every address a domain resolves to.
///
/// Cheap to clone; the resolver and the probe are shared.
#[derive(Clone)]
pub struct Prober {
    resolver: Arc<dyn Resolver>,
    probe: Arc<dyn HttpsProbe>,
    port: u16,
    concurrency: usize,
}

impl Prober {
    /// Creates a prober targeting port 443 with the default concurrency.
    pub fn new(resolver: Arc<dyn Resolver>, probe: Arc<dyn HttpsProbe>) -> Self {
        Self {
            resolver,
            probe,
            port: HTTPS_PORT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Creates a prober using the system resolver and WebPKI validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS client configuration cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let resolver = SystemResolver::from_system_conf(config.timeout());
        let probe = TlsProbe::with_default_roots()?;
        Ok(Self::new(Arc::new(resolver), Arc::new(probe))
            .with_port(config.port)
            .with_concurrency(config.concurrency))
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets how many addresses are probed at once. Values below 1 mean 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Forward-resolves `domain`, bounded by `limit`.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError` if the lookup fails, times out, or yields no
    /// addresses.
    pub async fn resolve(
        &self,
        domain: &str,
        limit: Duration,
    ) -> Result<Vec<IpAddr>, ResolutionError> {
        match timeout(limit, self.resolver.lookup(domain)).await {
            Ok(Ok(addresses)) if addresses.is_empty() => Err(ResolutionError::NoAddresses {
                host: domain.to_string(),
            }),
            Ok(Ok(addresses)) => Ok(addresses),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ResolutionError::Timeout {
                host: domain.to_string(),
                timeout_ms: limit.as_millis() as u64,
            }),
        }
    }

    /// Runs a sweep: one result per resolved address, in resolution order.
    ///
    /// `limit` applies to each network operation separately, not to the sweep.
    ///
    /// # Errors
    ///
    /// Only forward resolution failures are returned as errors. Per-address
    /// failures are recorded on the corresponding result.
    pub async fn probe_all(
        &self,
        domain: &str,
        limit: Duration,
    ) -> Result<Vec<ProbeResult>, ResolutionError> {
        let addresses = self.resolve(domain, limit).await?;
        info!(
            "Probing {} address(es) for {domain} (concurrency {})",
            addresses.len(),
            self.concurrency
        );

        let domain: Arc<str> = Arc::from(domain);
        let results = stream::iter(addresses)
            .map(|address| {
                let prober = self.clone();
                let domain = Arc::clone(&domain);
                async move {
                    let mut task = ProbeTask(tokio::spawn(async move {
                        prober.probe_one(address, &domain, limit).await
                    }));
                    match (&mut task.0).await {
                        Ok(result) => result,
                        Err(e) => {
                            warn!("Probe task for {address} did not complete: {e}");
                            let mut result = ProbeResult::new(address);
                            result.record_panic(format!("probe task failed: {e}"));
                            result
                        }
                    }
                }
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        let summary = SweepSummary::from_results(&results);
        info!(
            "Sweep of {domain} finished: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        );
        Ok(results)
    }

    /// Probes a single, already-resolved address.
    ///
    /// Never fails: reverse lookup failures become the `"(no PTR)"` sentinel,
    /// probe failures are written into `error`.
    pub async fn probe_one(&self, address: IpAddr, domain: &str, limit: Duration) -> ProbeResult {
        let mut result = ProbeResult::new(address);

        let reverse_name = match timeout(limit, self.resolver.reverse_lookup(address)).await {
            Ok(Ok(name)) => Some(name),
            Ok(Err(e)) => {
                debug!("Reverse lookup for {address} failed: {e}");
                None
            }
            Err(_) => {
                debug!(
                    "Reverse lookup for {address} timed out after {}ms",
                    limit.as_millis()
                );
                None
            }
        };
        result.set_reverse_name(reverse_name);

        let start = Instant::now();
        match self.probe.probe(address, domain, self.port, limit).await {
            Ok(status_line) => {
                debug!("{address} ({domain}) answered {status_line:?}");
                result.record_success(status_line, start.elapsed());
            }
            Err(e) => {
                warn!("Probe of {address} ({domain}) failed: {e}");
                result.record_failure(&e, start.elapsed());
            }
        }

        result
    }

    /// Runs a sweep and returns the fastest successful result.
    ///
    /// Returns `Ok(None)` when every probe failed.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError` if the domain cannot be resolved.
    pub async fn fastest(
        &self,
        domain: &str,
        limit: Duration,
    ) -> Result<Option<ProbeResult>, ResolutionError> {
        let results = self.probe_all(domain, limit).await?;
        Ok(select_fastest(&results).cloned())
    }
}

/// Spawned probe for one address, aborted when dropped.
///
/// Dropping a sweep mid-flight drops the pending `ProbeTask`s, so no probe
/// outlives the sweep that started it.
struct ProbeTask(JoinHandle<ProbeResult>);

impl Drop for ProbeTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Picks the successful result with the smallest `elapsed_ms`.
///
/// On ties the earliest result in resolution order wins. Returns `None` when
/// there are no successes.
pub fn select_fastest(results: &[ProbeResult]) -> Option<&ProbeResult> {
    results
        .iter()
        .filter(|r| r.is_success())
        .min_by_key(|r| r.elapsed_ms)
}
