// Shared test helpers: fixture resolvers and mock DoH endpoints.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io;
use std::net::Ipv4Addr;

use dns_integrity::{AddressResolver, AddressSet, DohConfig, DohResolver, ResolveError};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds an address set from dotted quads.
pub fn set(addrs: &[&str]) -> AddressSet {
    addrs
        .iter()
        .map(|a| a.parse::<Ipv4Addr>().expect("valid IPv4 literal"))
        .collect()
}

/// Stands in for the host resolver: answers from a fixed table and fails
/// with a name-not-found error for anything else.
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, AddressSet>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: &str, addrs: &[&str]) -> Self {
        self.answers.insert(domain.to_string(), set(addrs));
        self
    }
}

impl AddressResolver for StaticResolver {
    fn source(&self) -> &'static str {
        "static"
    }

    async fn lookup(&self, domain: &str) -> Result<AddressSet, ResolveError> {
        match self.answers.get(domain) {
            Some(addrs) if !addrs.is_empty() => Ok(addrs.clone()),
            Some(_) => Err(ResolveError::NoAddresses),
            None => Err(ResolveError::Resolution(io::Error::new(
                io::ErrorKind::NotFound,
                format!("failed to lookup address information: Name or service not known ({domain})"),
            ))),
        }
    }
}

/// A dns-json body with the given status and `(type, data)` answers.
/// `answers == None` omits the `Answer` field entirely.
#[allow(dead_code)]
pub fn doh_body(status: i64, answers: Option<&[(u16, &str)]>) -> Value {
    let mut body = json!({
        "Status": status,
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": false,
        "CD": false,
    });
    if let Some(answers) = answers {
        body["Answer"] = answers
            .iter()
            .map(|(record_type, data)| {
                json!({ "name": "fixture.", "type": record_type, "TTL": 300, "data": data })
            })
            .collect();
    }
    body
}

/// Mounts a dns-json answer for `domain` on `server`.
#[allow(dead_code)]
pub async fn mount_doh(server: &MockServer, domain: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", domain))
        .and(query_param("type", "A"))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// DoH settings pointing at `server`.
#[allow(dead_code)]
pub fn doh_config(server: &MockServer) -> DohConfig {
    DohConfig::with_endpoint(&format!("{}/resolve", server.uri())).expect("mock server URI")
}

/// A DoH resolver pointing at `server`.
#[allow(dead_code)]
pub fn doh_resolver(server: &MockServer) -> DohResolver {
    DohResolver::new(&doh_config(server)).expect("HTTP client")
}
