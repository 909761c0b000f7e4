//! TLS client configuration.

use std::sync::Arc;

use rustls::crypto::{ring::default_provider, CryptoProvider};
use tokio_rustls::rustls::ClientConfig;

use crate::error_handling::InitializationError;
use crate::tls::{CertificatePolicy, PolicyVerifier, WebPkiPolicy};

/// Builds the client configuration used by every probe.
///
/// Certificate validation is delegated to `policy` through `PolicyVerifier`;
/// handshake signature checks stay with the ring crypto provider.
///
/// # Errors
///
/// Returns `InitializationError::TlsConfigError` if the provider does not
/// support the default protocol versions.
pub fn init_tls_config(
    policy: Arc<dyn CertificatePolicy>,
) -> Result<Arc<ClientConfig>, InitializationError> {
    let provider = Arc::new(default_provider());
    let verifier = Arc::new(PolicyVerifier::new(policy, Arc::clone(&provider)));

    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| InitializationError::TlsConfigError(e.to_string()))?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_no_client_auth();

    Ok(Arc::new(config))
}

/// Builds the default client configuration: WebPKI validation against the
/// bundled Mozilla root set, with hostname verification.
///
/// # Errors
///
/// Returns `InitializationError::TlsConfigError` if the verifier cannot be built.
pub fn init_default_tls_config() -> Result<Arc<ClientConfig>, InitializationError> {
    let policy = WebPkiPolicy::new(Arc::new(default_provider()))?;
    init_tls_config(Arc::new(policy))
}

/// Installs the process-wide crypto provider for `rustls`.
///
/// Configs built here pass their provider explicitly, but the resolver and any
/// embedding code may rely on the process default.
pub fn init_crypto_provider() {
    // Reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
