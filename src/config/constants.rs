//! Configuration constants.
//!
//! This module defines the defaults used when resolving domains through the
//! trusted DNS-over-HTTPS provider.

/// Default DNS-over-HTTPS endpoint (Google Public DNS JSON API).
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

/// DoH request timeout in seconds.
/// Bounds the whole request (connect, TLS, response body) so a single
/// unresponsive domain cannot stall the run.
pub const DOH_TIMEOUT_SECS: u64 = 5;

/// Media type requested from the DoH endpoint.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// DNS record type code for A (IPv4 address) records.
pub const A_RECORD_TYPE: u16 = 1;

/// Query type sent to the DoH endpoint.
pub const DOH_QUERY_TYPE: &str = "A";

/// User-Agent sent with DoH requests.
pub const DEFAULT_USER_AGENT: &str = concat!("dns_integrity/", env!("CARGO_PKG_VERSION"));

/// Environment variable selecting the log format (`plain` or `json`).
pub const LOG_FORMAT_ENV: &str = "DNS_INTEGRITY_LOG_FORMAT";

/// Placeholder printed when a resolver produced no addresses.
pub const NO_ADDRESSES_PLACEHOLDER: &str = "Resolution failed/No IPs found";
