//! domain_probe library: per-backend TLS probing of a domain
//!
//! This library resolves a domain to all of its addresses and, for each one,
//! performs a reverse DNS lookup and a direct TLS/HTTPS probe (SNI and `Host`
//! set to the domain), reporting the status line and the latency. It lets an
//! operator see the health and identity of every backend behind a round-robin
//! or anycast name.
//!
//! # Example
//!
//! ```no_run
//! use domain_probe::{Config, Prober};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//! let prober = Prober::from_config(&config)?;
//!
//! for result in prober.probe_all("example.com", Duration::from_secs(5)).await? {
//!     println!("{} {} {}", result.address, result.status_code, result.error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod output;
pub mod prober;
pub mod tls;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{Resolver, SystemResolver};
pub use error_handling::{ErrorType, ProbeError, ResolutionError};
pub use prober::{select_fastest, ProbeResult, Prober, SweepSummary};
pub use tls::{CertificatePolicy, HttpsProbe, TlsProbe};
