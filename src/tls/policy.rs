//! Certificate validation policy.
//!
//! The handshake asks a `CertificatePolicy` whether the presented chain is
//! acceptable for the expected host. `WebPkiPolicy` is the production policy;
//! tests inject their own to simulate rejected certificates without needing
//! real invalid ones.

use std::fmt;
use std::sync::Arc;

use log::debug;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::WebPkiServerVerifier;
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, RootCertStore, SignatureScheme};

use crate::error_handling::InitializationError;

/// Decides whether a server certificate chain is acceptable.
///
/// Invoked synchronously during the handshake. Returning `Err` aborts the
/// handshake; the error text ends up in the probe's `TLS error` message.
pub trait CertificatePolicy: Send + Sync + fmt::Debug {
    fn validate(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        expected_host: &ServerName<'_>,
        now: UnixTime,
    ) -> Result<(), rustls::Error>;
}

/// Standard trust-chain and hostname verification against the Mozilla root set.
#[derive(Debug)]
pub struct WebPkiPolicy {
    verifier: Arc<WebPkiServerVerifier>,
}

impl WebPkiPolicy {
    pub fn new(provider: Arc<CryptoProvider>) -> Result<Self, InitializationError> {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let verifier = WebPkiServerVerifier::builder_with_provider(Arc::new(root_store), provider)
            .build()
            .map_err(|e| InitializationError::TlsConfigError(e.to_string()))?;

        Ok(Self { verifier })
    }
}

impl CertificatePolicy for WebPkiPolicy {
    fn validate(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        expected_host: &ServerName<'_>,
        now: UnixTime,
    ) -> Result<(), rustls::Error> {
        self.verifier
            .verify_server_cert(end_entity, intermediates, expected_host, &[], now)
            .map(|_| ())
    }
}

/// Adapts a `CertificatePolicy` to rustls' `ServerCertVerifier`.
///
/// Only the chain decision is delegated. Handshake signatures are always
/// checked with the provider's algorithms.
#[derive(Debug)]
pub struct PolicyVerifier {
    policy: Arc<dyn CertificatePolicy>,
    provider: Arc<CryptoProvider>,
}

impl PolicyVerifier {
    pub fn new(policy: Arc<dyn CertificatePolicy>, provider: Arc<CryptoProvider>) -> Self {
        Self { policy, provider }
    }
}

impl ServerCertVerifier for PolicyVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        if let Err(e) = self
            .policy
            .validate(end_entity, intermediates, server_name, now)
        {
            debug!("Certificate for {server_name:?} rejected: {e}");
            return Err(e);
        }
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
