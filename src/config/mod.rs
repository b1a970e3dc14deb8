//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (DoH endpoint, timeouts, record types)
//! - Library configuration and DoH resolver settings
//! - Logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, DohConfig, LogFormat, LogLevel};
