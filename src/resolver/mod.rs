//! IPv4 address resolution through two independent channels.
//!
//! This module provides:
//! - [`SystemResolver`]: the host's configured name service (`getaddrinfo`)
//! - [`DohResolver`]: a trusted DNS-over-HTTPS endpoint speaking dns-json
//!
//! Both implement [`AddressResolver`], which returns a tagged result.
//! [`resolve_or_empty`] degrades any failure to an empty set after logging it.

mod doh;
mod response;
mod system;

use std::collections::BTreeSet;
use std::future::Future;
use std::net::Ipv4Addr;

use crate::error_handling::{FailureStats, ResolveError};

// Re-export public API
pub use doh::DohResolver;
pub use response::{DohRecord, DohResponse};
pub use system::SystemResolver;

/// Unique IPv4 addresses returned for one domain by one resolver.
pub type AddressSet = BTreeSet<Ipv4Addr>;

/// A source of IPv4 addresses for a domain.
pub trait AddressResolver {
    /// Short label used in diagnostics (e.g. `"system"`, `"DoH"`).
    fn source(&self) -> &'static str;

    /// Looks up the IPv4 addresses of `domain`. Performs exactly one attempt.
    fn lookup(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<AddressSet, ResolveError>> + Send;
}

/// Runs `resolver` for `domain`, turning any failure into an empty set.
///
/// Failures are logged as warnings (stderr) and counted in `stats`; they are
/// never propagated.
pub async fn resolve_or_empty<R: AddressResolver>(
    resolver: &R,
    domain: &str,
    stats: &FailureStats,
) -> AddressSet {
    match resolver.lookup(domain).await {
        Ok(addresses) => {
            if addresses.is_empty() {
                log::info!("{} resolver returned no A records for {}", resolver.source(), domain);
            } else {
                log::debug!(
                    "{} resolver returned {} address(es) for {}",
                    resolver.source(),
                    addresses.len(),
                    domain
                );
            }
            addresses
        }
        Err(e) => {
            log::warn!("{} resolver error for {}: {}", resolver.source(), domain, e);
            stats.increment(e.kind());
            AddressSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FailureKind;

    struct FixedResolver(Result<Vec<Ipv4Addr>, fn() -> ResolveError>);

    impl AddressResolver for FixedResolver {
        fn source(&self) -> &'static str {
            "fixed"
        }

        async fn lookup(&self, _domain: &str) -> Result<AddressSet, ResolveError> {
            match &self.0 {
                Ok(addresses) => Ok(addresses.iter().copied().collect()),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_or_empty_passes_addresses_through() {
        let stats = FailureStats::new();
        let resolver = FixedResolver(Ok(vec![
            Ipv4Addr::new(192, 0, 2, 1),
            Ipv4Addr::new(192, 0, 2, 1),
            Ipv4Addr::new(192, 0, 2, 2),
        ]));

        let addresses = resolve_or_empty(&resolver, "example.com", &stats).await;
        assert_eq!(addresses.len(), 2);
        assert_eq!(stats.total(), 0);
    }

    #[tokio::test]
    async fn test_resolve_or_empty_degrades_failure_to_empty_set() {
        let stats = FailureStats::new();
        let resolver = FixedResolver(Err(|| ResolveError::UpstreamDns {
            status: Some(3),
            comment: None,
        }));

        let addresses = resolve_or_empty(&resolver, "nx.example", &stats).await;
        assert!(addresses.is_empty());
        assert_eq!(stats.get(FailureKind::UpstreamDns), 1);
        assert_eq!(stats.total(), 1);
    }

    #[tokio::test]
    async fn test_resolve_or_empty_counts_each_failure_kind() {
        let stats = FailureStats::new();
        let system = FixedResolver(Err(|| ResolveError::NoAddresses));
        let doh = FixedResolver(Err(|| {
            ResolveError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }));

        assert!(resolve_or_empty(&system, "a.example", &stats).await.is_empty());
        assert!(resolve_or_empty(&doh, "a.example", &stats).await.is_empty());
        assert_eq!(stats.get(FailureKind::Resolution), 1);
        assert_eq!(stats.get(FailureKind::Transport), 1);
    }
}
