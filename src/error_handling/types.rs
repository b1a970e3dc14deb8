//! Error type definitions.
//!
//! This module defines the resolver failure taxonomy and initialization errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A single failed lookup, as returned by an [`AddressResolver`](crate::AddressResolver).
///
/// None of these terminate a run: the orchestration layer degrades every
/// variant to an empty address set.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The platform resolver reported an error (name not found, resolver unreachable).
    #[error("system lookup failed: {0}")]
    Resolution(#[from] std::io::Error),

    /// The platform resolver answered, but without any IPv4 address.
    #[error("no IPv4 addresses returned")]
    NoAddresses,

    /// The HTTPS request to the DoH endpoint failed (connect, TLS, timeout, body).
    #[error("DoH request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The DoH endpoint answered with a non-success HTTP status.
    #[error("DoH endpoint returned HTTP {0}")]
    HttpStatus(StatusCode),

    /// The DoH response body is not a JSON object.
    #[error("DoH response is not valid dns-json: {0}")]
    Protocol(#[from] serde_json::Error),

    /// The DoH endpoint reported a non-zero DNS status for the query.
    #[error("DoH status code {}{}", format_status(.status), format_comment(.comment.as_deref()))]
    UpstreamDns {
        /// `Status` field of the response, `None` when absent
        status: Option<i64>,
        /// Free-text `Comment` field, when the provider sends one
        comment: Option<String>,
    },
}

impl ResolveError {
    /// Maps this error onto its failure category.
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::Resolution(_) | ResolveError::NoAddresses => FailureKind::Resolution,
            ResolveError::Transport(_) | ResolveError::HttpStatus(_) => FailureKind::Transport,
            ResolveError::Protocol(_) => FailureKind::Protocol,
            ResolveError::UpstreamDns { .. } => FailureKind::UpstreamDns,
        }
    }
}

/// Categories of resolver failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Local name-service lookup error
    Resolution,
    /// HTTPS-layer error reaching the DoH endpoint, including non-2xx statuses
    Transport,
    /// Malformed or unparsable DoH response body
    Protocol,
    /// Non-zero DNS status reported by the DoH endpoint
    UpstreamDns,
}

impl FailureKind {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Resolution => "system resolution failure",
            FailureKind::Transport => "DoH transport failure",
            FailureKind::Protocol => "DoH protocol failure",
            FailureKind::UpstreamDns => "DoH upstream DNS failure",
        }
    }
}

/// Returns the mnemonic for a DNS response code (RFC 1035, RFC 2136, RFC 6891).
pub fn rcode_name(status: i64) -> Option<&'static str> {
    let name = match status {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADVERS",
        _ => return None,
    };
    Some(name)
}

fn format_status(status: &Option<i64>) -> String {
    match *status {
        Some(code) => match rcode_name(code) {
            Some(name) => format!("{code} ({name})"),
            None => code.to_string(),
        },
        None => "missing".to_string(),
    }
}

fn format_comment(comment: Option<&str>) -> String {
    match comment {
        Some(c) if !c.trim().is_empty() => format!(": {}", c.trim()),
        _ => String::new(),
    }
}
