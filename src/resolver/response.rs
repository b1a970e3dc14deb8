//! Typed model of a dns-json response.
//!
//! Every field is optional and parsed leniently: a field with an unexpected
//! JSON shape reads as absent instead of failing the whole document. Only a
//! body that is not a JSON object is rejected.

use std::net::Ipv4Addr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::AddressSet;
use crate::config::A_RECORD_TYPE;
use crate::error_handling::ResolveError;

/// Top-level dns-json document (as served by `https://dns.google/resolve`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DohResponse {
    /// DNS response code; 0 (NOERROR) means the query succeeded
    #[serde(rename = "Status", default, deserialize_with = "lenient")]
    pub status: Option<i64>,

    /// Response was truncated
    #[serde(rename = "TC", default, deserialize_with = "lenient")]
    pub truncated: Option<bool>,

    /// Recursion desired flag echoed from the query
    #[serde(rename = "RD", default, deserialize_with = "lenient")]
    pub recursion_desired: Option<bool>,

    /// Recursion available
    #[serde(rename = "RA", default, deserialize_with = "lenient")]
    pub recursion_available: Option<bool>,

    /// Answer was DNSSEC-validated by the provider
    #[serde(rename = "AD", default, deserialize_with = "lenient")]
    pub authenticated_data: Option<bool>,

    /// DNSSEC checking disabled
    #[serde(rename = "CD", default, deserialize_with = "lenient")]
    pub checking_disabled: Option<bool>,

    /// Raw answer entries; each is parsed on its own by [`DohResponse::records`]
    #[serde(rename = "Answer", default, deserialize_with = "lenient")]
    pub answer: Option<Vec<Value>>,

    /// Provider diagnostic text
    #[serde(rename = "Comment", default, deserialize_with = "lenient")]
    pub comment: Option<String>,
}

/// One entry of the `Answer` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DohRecord {
    /// Owner name, usually fully qualified
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// DNS record type code (1 = A, 5 = CNAME, ...)
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub record_type: Option<u16>,

    /// Time to live in seconds
    #[serde(rename = "TTL", default, deserialize_with = "lenient")]
    pub ttl: Option<u32>,

    /// Record data; the dotted quad for A records
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<String>,
}

impl DohResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Protocol` if `body` is not JSON or its top-level
    /// value is not an object.
    pub fn parse(body: &[u8]) -> Result<Self, ResolveError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(ResolveError::Protocol(serde_json::Error::custom(
                "top-level dns-json value is not an object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The query succeeded (`Status == 0`), whether or not records were found.
    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Answer entries that are JSON objects. Anything else is skipped.
    pub fn records(&self) -> impl Iterator<Item = DohRecord> + '_ {
        self.answer
            .iter()
            .flatten()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
    }

    /// IPv4 addresses from type-1 records carrying a `data` field.
    ///
    /// Other record types (e.g. CNAME chains) and records without `data` are
    /// ignored; so is A-record data that is not a dotted quad.
    pub fn a_records(&self) -> AddressSet {
        let mut addresses = AddressSet::new();
        for record in self.records() {
            if record.record_type != Some(A_RECORD_TYPE) {
                continue;
            }
            let Some(data) = record.data.as_deref() else {
                continue;
            };
            match data.trim().parse::<Ipv4Addr>() {
                Ok(ip) => {
                    addresses.insert(ip);
                }
                Err(_) => log::debug!(
                    "Skipping A record with non-IPv4 data {:?} (name: {:?})",
                    data,
                    record.name
                ),
            }
        }
        addresses
    }

    /// Converts the document into the resolver's result.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UpstreamDns` when `Status` is non-zero or absent.
    pub fn into_addresses(self) -> Result<AddressSet, ResolveError> {
        if !self.is_success() {
            return Err(ResolveError::UpstreamDns {
                status: self.status,
                comment: self.comment,
            });
        }
        Ok(self.a_records())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_google_style_answer() {
        let body = br#"{
            "Status": 0, "TC": false, "RD": true, "RA": true, "AD": false, "CD": false,
            "Question": [{"name": "example.com.", "type": 1}],
            "Answer": [{"name": "example.com.", "type": 1, "TTL": 3600, "data": "93.184.216.34"}]
        }"#;

        let response = DohResponse::parse(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.truncated, Some(false));
        assert_eq!(response.recursion_desired, Some(true));

        let records: Vec<DohRecord> = response.records().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("example.com."));
        assert_eq!(records[0].ttl, Some(3600));

        let addresses = response.into_addresses().unwrap();
        assert_eq!(addresses, AddressSet::from([ip("93.184.216.34")]));
    }

    #[test]
    fn test_only_a_records_contribute() {
        let body = br#"{"Status": 0, "Answer": [
            {"name": "www.example.com.", "type": 5, "TTL": 60, "data": "cdn.example.net."},
            {"name": "cdn.example.net.", "type": 1, "TTL": 60, "data": "203.0.113.5"},
            {"name": "cdn.example.net.", "type": 1, "TTL": 60, "data": "203.0.113.6"},
            {"name": "cdn.example.net.", "type": 28, "TTL": 60, "data": "2001:db8::1"}
        ]}"#;

        let addresses = DohResponse::parse(body).unwrap().into_addresses().unwrap();
        assert_eq!(
            addresses,
            AddressSet::from([ip("203.0.113.5"), ip("203.0.113.6")])
        );
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let body = br#"{"Status": 0, "Answer": [
            {"type": 1},
            {"type": 1, "data": 42},
            {"type": "1", "data": "198.51.100.1"},
            {"type": 1, "data": "not-an-ip"},
            "garbage",
            null,
            {"type": 1, "data": " 198.51.100.7 "}
        ]}"#;

        let response = DohResponse::parse(body).unwrap();
        assert_eq!(response.records().count(), 5);
        assert_eq!(
            response.into_addresses().unwrap(),
            AddressSet::from([ip("198.51.100.7")])
        );
    }

    #[test]
    fn test_duplicate_a_records_deduplicate() {
        let body = br#"{"Status": 0, "Answer": [
            {"type": 1, "data": "192.0.2.10"},
            {"type": 1, "data": "192.0.2.10"}
        ]}"#;

        let addresses = DohResponse::parse(body).unwrap().into_addresses().unwrap();
        assert_eq!(addresses.len(), 1);
    }

    #[test]
    fn test_success_without_answer_is_empty() {
        let response = DohResponse::parse(br#"{"Status": 0}"#).unwrap();
        assert!(response.is_success());
        assert!(response.into_addresses().unwrap().is_empty());

        // Answer that is not a list reads as absent
        let response = DohResponse::parse(br#"{"Status": 0, "Answer": {"type": 1}}"#).unwrap();
        assert_eq!(response.answer, None);
        assert!(response.into_addresses().unwrap().is_empty());
    }

    #[test]
    fn test_nxdomain_is_upstream_failure() {
        let body = br#"{"Status": 3, "TC": false, "Comment": "Response from 192.0.2.53."}"#;
        let err = DohResponse::parse(body).unwrap().into_addresses().unwrap_err();
        match err {
            ResolveError::UpstreamDns { status, comment } => {
                assert_eq!(status, Some(3));
                assert_eq!(comment.as_deref(), Some("Response from 192.0.2.53."));
            }
            other => panic!("expected UpstreamDns, got {:?}", other),
        }
    }

    #[test]
    fn test_non_zero_status_ignores_answer() {
        let body = br#"{"Status": 2, "Answer": [{"type": 1, "data": "192.0.2.1"}]}"#;
        let result = DohResponse::parse(body).unwrap().into_addresses();
        assert!(matches!(
            result,
            Err(ResolveError::UpstreamDns { status: Some(2), .. })
        ));
    }

    #[test]
    fn test_missing_or_malformed_status_is_upstream_failure() {
        let response = DohResponse::parse(br#"{"Answer": []}"#).unwrap();
        assert_eq!(response.status, None);
        assert!(!response.is_success());
        assert!(matches!(
            response.into_addresses(),
            Err(ResolveError::UpstreamDns { status: None, .. })
        ));

        let response = DohResponse::parse(br#"{"Status": "0"}"#).unwrap();
        assert_eq!(response.status, None);
    }

    #[test]
    fn test_invalid_json_is_protocol_failure() {
        for body in [&b"<html>oops</html>"[..], b"", b"{\"Status\": 0,"] {
            let err = DohResponse::parse(body).unwrap_err();
            assert!(
                matches!(err, ResolveError::Protocol(_)),
                "expected Protocol for {:?}, got {:?}",
                String::from_utf8_lossy(body),
                err
            );
        }
    }

    #[test]
    fn test_non_object_json_is_protocol_failure() {
        for body in [&b"[]"[..], b"0", b"\"Status\"", b"null"] {
            let err = DohResponse::parse(body).unwrap_err();
            assert!(matches!(err, ResolveError::Protocol(_)));
        }
    }
}
