//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - TLS client configuration and crypto provider
//!
//! All fallible initialization functions return `InitializationError`.

mod logger;
mod resolver;
mod tls;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
pub use tls::{init_crypto_provider, init_default_tls_config, init_tls_config};
