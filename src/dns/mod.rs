//! DNS resolution.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - IP address resolution (A/AAAA records), preserving answer order
//! - Reverse lookups (PTR records)
//!
//! Both are reached through the `Resolver` trait so that sweeps can run against
//! substitute resolvers.

mod resolution;

// Re-export public API
pub use resolution::{normalize_ptr_name, Resolver, SystemResolver};
