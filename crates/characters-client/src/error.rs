// crates/characters-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Local failure surface of the Characters client.
// Purpose: Distinguish transport and decode failures from remote 4xx bodies.
// Dependencies: thiserror, reqwest, url
// ============================================================================

//! ## Overview
//! Remote error responses are not errors here: the client hands 4xx exchanges
//! back verbatim for suites to assert on. Only local failures surface as
//! [`ClientError`]: a malformed base URL, a transport-level send failure, or
//! a response body that does not decode into the requested type.

use thiserror::Error;

/// Local failures raised by the Characters client.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url {url}: {source}")]
    BaseUrl {
        /// The offending configured value.
        url: String,
        /// Parse failure reported by the URL parser.
        source: url::ParseError,
    },
    /// The HTTP exchange failed before a response was read.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body did not decode into the requested type.
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded when the failure occurred.
        context: &'static str,
        /// Underlying deserialization failure.
        source: serde_json::Error,
    },
}
