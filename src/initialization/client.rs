//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{DohConfig, DEFAULT_USER_AGENT};

/// Initializes the HTTP client used for DoH queries.
///
/// Creates a `reqwest::Client` configured with:
/// - A whole-request timeout from the DoH settings
/// - The crate's User-Agent
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &DohConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&DohConfig::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_timeout() {
        let config = DohConfig {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
