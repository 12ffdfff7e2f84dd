//! Error types for the PayWhirl client.
//!
//! # Design
//! Every non-2xx response lands in `Http` with the raw status code and body,
//! 404 included, so callers always see what the server said. Use
//! `is_not_found` rather than a dedicated variant. Transport failures are kept
//! apart from HTTP failures: the former mean no response was received at all.

use thiserror::Error;

/// Errors returned by `PayWhirl` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The round trip could not be completed (DNS, TLS, connection reset...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request parameters could not be encoded as a JSON object.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
