//! TLS/HTTP probe routine.
//!
//! This module connects to a single backend address and reports the first line
//! of its HTTP response:
//! - TCP connect to `address:port`
//! - TLS handshake presenting the domain as SNI, validated by a `CertificatePolicy`
//! - `GET /` with `Host` set to the domain and `Connection: close`
//! - One read, first line kept
//!
//! Every step is bounded by the same per-operation timeout. When a deadline
//! fires the in-flight future is dropped, which closes the socket.
//!
//! Uses `tokio-rustls` for async TLS connections.

mod exchange;
mod policy;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::rustls::ClientConfig;
use tokio_rustls::TlsConnector;

use crate::error_handling::{
    categorize_handshake_error, InitializationError, ProbeError, ProbePhase,
};
use crate::initialization::init_default_tls_config;

use exchange::timeout_error;

pub use exchange::{build_request, fetch_status_line, first_line};
pub use policy::{CertificatePolicy, PolicyVerifier, WebPkiPolicy};

/// Something that can fetch a status line from one backend address.
///
/// `TlsProbe` is the real implementation. The orchestrator only depends on
/// this trait, so sweeps can be driven by substitute probes.
#[async_trait]
pub trait HttpsProbe: Send + Sync {
    /// Returns the status line served by `address:port` for `sni_host`.
    async fn probe(
        &self,
        address: IpAddr,
        sni_host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<String, ProbeError>;
}

/// Probes over a real TCP connection with rustls.
#[derive(Clone)]
pub struct TlsProbe {
    connector: TlsConnector,
}

impl TlsProbe {
    /// Creates a probe using the given client configuration.
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self {
            connector: TlsConnector::from(config),
        }
    }

    /// Creates a probe validating certificates against the Mozilla root set.
    pub fn with_default_roots() -> Result<Self, InitializationError> {
        Ok(Self::new(init_default_tls_config()?))
    }
}

#[async_trait]
impl HttpsProbe for TlsProbe {
    async fn probe(
        &self,
        address: IpAddr,
        sni_host: &str,
        port: u16,
        limit: Duration,
    ) -> Result<String, ProbeError> {
        let server_name = ServerName::try_from(sni_host.to_string())
            .map_err(|e| ProbeError::Tls(format!("invalid server name {sni_host:?}: {e}")))?;

        let socket_addr = SocketAddr::new(address, port);
        debug!("Connecting to {socket_addr} for {sni_host}");

        let sock = match timeout(limit, TcpStream::connect(socket_addr)).await {
            Ok(Ok(sock)) => sock,
            Ok(Err(e)) => {
                return Err(ProbeError::Io {
                    phase: ProbePhase::Connect,
                    source: e,
                })
            }
            Err(_) => return Err(timeout_error(ProbePhase::Connect, limit)),
        };

        debug!("TLS handshake with {socket_addr} (SNI {sni_host})");
        let mut tls_stream = match timeout(limit, self.connector.connect(server_name, sock)).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(categorize_handshake_error(e)),
            Err(_) => return Err(timeout_error(ProbePhase::Handshake, limit)),
        };

        if let Some(version) = tls_stream.get_ref().1.protocol_version() {
            debug!("Negotiated {version:?} with {socket_addr}");
        }

        fetch_status_line(&mut tls_stream, sni_host, limit).await
    }
}
