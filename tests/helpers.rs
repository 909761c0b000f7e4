// Shared test helpers: a local TLS server and certificate policies.
//
// The server uses a self-signed certificate checked in under tests/fixtures
// (CN=localhost, SANs localhost, example.com and 127.0.0.1), so a client only
// completes the handshake when its policy accepts that certificate.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use domain_probe::initialization::init_tls_config;
use domain_probe::{CertificatePolicy, TlsProbe};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer, ServerName, UnixTime};
use rustls::ServerConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

#[allow(dead_code)]
pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

const CERT_DER: &[u8] = include_bytes!("fixtures/localhost.cert.der");
const KEY_DER: &[u8] = include_bytes!("fixtures/localhost.key.der");

/// What the local TLS server does once the handshake has completed and the
/// request has been read.
#[allow(dead_code)] // Each test file uses a subset
#[derive(Clone, Copy, Debug)]
pub enum AfterHandshake {
    /// Write these bytes, then send close_notify
    Respond(&'static [u8]),
    /// Drop the TCP connection without close_notify
    DropConnection,
    /// Send close_notify without writing anything
    Shutdown,
}

fn server_config() -> Arc<ServerConfig> {
    let cert = CertificateDer::from(CERT_DER.to_vec());
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(KEY_DER.to_vec()));

    let config =
        ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()
            .expect("Failed to select protocol versions")
            .with_no_client_auth()
            .with_single_cert(vec![cert], key)
            .expect("Failed to load test certificate");
    Arc::new(config)
}

/// Starts a TLS server on 127.0.0.1 and returns its port.
///
/// Every accepted connection is handled the same way; connections whose
/// handshake fails are dropped.
#[allow(dead_code)]
pub async fn spawn_tls_server(behavior: AfterHandshake) -> u16 {
    let listener = TcpListener::bind(SocketAddr::new(LOCALHOST, 0))
        .await
        .expect("Failed to bind test listener");
    let port = listener.local_addr().unwrap().port();
    let acceptor = TlsAcceptor::from(server_config());

    tokio::spawn(async move {
        while let Ok((sock, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                let Ok(mut tls) = acceptor.accept(sock).await else {
                    return;
                };
                let mut buf = [0u8; 1024];
                let _ = tls.read(&mut buf).await;

                match behavior {
                    AfterHandshake::Respond(bytes) => {
                        let _ = tls.write_all(bytes).await;
                        let _ = tls.shutdown().await;
                    }
                    AfterHandshake::DropConnection => drop(tls),
                    AfterHandshake::Shutdown => {
                        let _ = tls.shutdown().await;
                    }
                }
            });
        }
    });
    port
}

/// Accepts any certificate; handshake signatures are still checked.
#[allow(dead_code)]
#[derive(Debug)]
pub struct AcceptAll;

impl CertificatePolicy for AcceptAll {
    fn validate(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _expected_host: &ServerName<'_>,
        _now: UnixTime,
    ) -> Result<(), rustls::Error> {
        Ok(())
    }
}

/// Rejects every certificate with a recognisable reason.
#[allow(dead_code)]
#[derive(Debug)]
pub struct RejectEverything;

impl CertificatePolicy for RejectEverything {
    fn validate(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _expected_host: &ServerName<'_>,
        _now: UnixTime,
    ) -> Result<(), rustls::Error> {
        Err(rustls::Error::General("rejected by test policy".to_string()))
    }
}

/// A `TlsProbe` validating certificates with `policy`.
#[allow(dead_code)]
pub fn tls_client_with(policy: Arc<dyn CertificatePolicy>) -> TlsProbe {
    TlsProbe::new(init_tls_config(policy).expect("Failed to build TLS config"))
}

/// A `TlsProbe` that trusts the local test server.
#[allow(dead_code)]
pub fn trusting_client() -> TlsProbe {
    tls_client_with(Arc::new(AcceptAll))
}
