//! DNS-over-HTTPS lookups against a dns-json endpoint.

use reqwest::header::ACCEPT;
use url::Url;

use super::{AddressResolver, AddressSet, DohResponse};
use crate::config::{DohConfig, DNS_JSON_CONTENT_TYPE, DOH_QUERY_TYPE};
use crate::error_handling::{InitializationError, ResolveError};
use crate::initialization::init_client;

/// Resolves domains through a trusted DoH provider.
///
/// Sends one `GET <endpoint>?name=<domain>&type=A` with
/// `accept: application/dns-json` per lookup. There is no retry; the
/// request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: Url,
}

impl DohResolver {
    /// Builds a resolver from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be created (e.g. no TLS backend available).
    pub fn new(config: &DohConfig) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(DohResolver {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint queried by this resolver.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AddressResolver for DohResolver {
    fn source(&self) -> &'static str {
        "DoH"
    }

    async fn lookup(&self, domain: &str) -> Result<AddressSet, ResolveError> {
        log::debug!("Querying {} for {}", self.endpoint, domain);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("name", domain), ("type", DOH_QUERY_TYPE)])
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let parsed = DohResponse::parse(&body)?;
        if parsed.truncated == Some(true) {
            log::debug!("DoH response for {} was truncated", domain);
        }
        parsed.into_addresses()
    }
}
