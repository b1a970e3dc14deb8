//! Lookups through the host's configured resolver.

use std::net::SocketAddr;

use super::{AddressResolver, AddressSet};
use crate::error_handling::ResolveError;

/// Resolves domains with the platform's `getaddrinfo` (hosts file, nsswitch,
/// `/etc/resolv.conf` and whatever else the host is configured to use).
///
/// Only IPv4 addresses are kept. The call is bounded by the platform's own
/// resolver timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a resolver backed by the host configuration.
    pub fn new() -> Self {
        SystemResolver
    }
}

impl AddressResolver for SystemResolver {
    fn source(&self) -> &'static str {
        "system"
    }

    async fn lookup(&self, domain: &str) -> Result<AddressSet, ResolveError> {
        // Port 0 is only there to satisfy ToSocketAddrs
        let resolved = tokio::net::lookup_host((domain, 0)).await?;
        let addresses = ipv4_only(resolved);
        if addresses.is_empty() {
            return Err(ResolveError::NoAddresses);
        }
        Ok(addresses)
    }
}

fn ipv4_only(addrs: impl IntoIterator<Item = SocketAddr>) -> AddressSet {
    addrs
        .into_iter()
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(*v4.ip()),
            SocketAddr::V6(_) => None,
        })
        .collect()
}
