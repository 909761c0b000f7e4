//! Sweep-level aggregates.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::ProbeResult;
use crate::error_handling::ErrorType;

/// Counts over the results of one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Failures per category; every category is present, zero when unseen
    pub errors: HashMap<ErrorType, usize>,
    /// Smallest `elapsed_ms` among successes
    pub fastest_ms: Option<u64>,
    /// Largest `elapsed_ms` among successes
    pub slowest_ms: Option<u64>,
}

impl SweepSummary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let mut errors: HashMap<ErrorType, usize> = ErrorType::iter().map(|t| (t, 0)).collect();
        let mut succeeded = 0;
        let mut fastest_ms: Option<u64> = None;
        let mut slowest_ms: Option<u64> = None;

        for result in results {
            if result.is_success() {
                succeeded += 1;
                let elapsed = result.elapsed_ms;
                fastest_ms = Some(fastest_ms.map_or(elapsed, |f| f.min(elapsed)));
                slowest_ms = Some(slowest_ms.map_or(elapsed, |s| s.max(elapsed)));
            } else if let Some(error_type) = result.error_type {
                *errors.entry(error_type).or_insert(0) += 1;
            }
        }

        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            errors,
            fastest_ms,
            slowest_ms,
        }
    }

    pub fn error_count(&self, error_type: ErrorType) -> usize {
        self.errors.get(&error_type).copied().unwrap_or(0)
    }

    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.succeeded == 0
    }
}
