//! Resolver failure statistics.
//!
//! Counts failed lookups per [`FailureKind`] over a run. The counters are
//! diagnostic only and never influence verdicts or exit codes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe failure counters, one per [`FailureKind`].
///
/// All kinds are initialized to zero on creation.
#[derive(Debug)]
pub struct FailureStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl FailureStats {
    /// Creates counters for every failure kind, all at zero.
    pub fn new() -> Self {
        let failures = FailureKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        FailureStats { failures }
    }

    /// Increment the counter for `kind`.
    pub fn increment(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Current count for `kind`.
    pub fn get(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total(&self) -> usize {
        FailureKind::iter().map(|kind| self.get(kind)).sum()
    }

    /// Non-zero counters in declaration order.
    pub fn non_zero(&self) -> Vec<(FailureKind, usize)> {
        FailureKind::iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Logs a per-kind breakdown at info level. Silent when nothing failed.
    pub fn log_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        log::info!("Lookup failures: {}", total);
        for (kind, count) in self.non_zero() {
            log::info!("   {}: {}", kind.as_str(), count);
        }
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
