//! Error handling and failure statistics.
//!
//! This module provides:
//! - The resolver failure taxonomy ([`ResolveError`], [`FailureKind`])
//! - Initialization errors
//! - Per-run failure counters
//!
//! Resolver failures are never fatal. They are logged, counted, and turned
//! into an empty address set by the caller.

mod stats;
mod types;

// Re-export public API
pub use stats::FailureStats;
pub use types::{rcode_name, FailureKind, InitializationError, ResolveError};
