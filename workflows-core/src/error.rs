//! Error types for the workflows transport layer.
//!
//! [`TransportError`] covers everything that stops a round trip from
//! completing. [`StatusError`] tags an error with the HTTP status it came
//! from, and the `is_*_error` predicates walk a `source()` chain looking for
//! one.

use crate::transport::HttpError;
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Boxed, thread-safe error used for wrapped causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that prevent a request from producing a decoded response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP transport failed (connection, timeout, unmatched mock).
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A success body did not match the declared schema.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Invalid API root URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The security source refused to provide credentials.
    #[error("authentication failed: {0}")]
    Auth(String),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// An error carrying the HTTP status code of the response that caused it.
///
/// A status of `0` means the failure did not come from an HTTP response
/// (network error, undecodable body, unexpected status). Predicates never
/// match it.
#[derive(Debug)]
pub struct StatusError {
    status: u16,
    source: Option<BoxError>,
}

impl StatusError {
    /// Wrap `source` with an HTTP status code.
    pub fn new(status: u16, source: Option<BoxError>) -> Self {
        Self { status, source }
    }

    /// HTTP status code, or `0` for non-HTTP failures.
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status != 0 {
            let reason = StatusCode::from_u16(self.status)
                .ok()
                .and_then(|code| code.canonical_reason());
            match reason {
                Some(reason) => write!(f, "{} {}", self.status, reason)?,
                None => write!(f, "{}", self.status)?,
            }
            if let Some(source) = &self.source {
                write!(f, ": {source}")?;
            }
            Ok(())
        } else {
            match &self.source {
                Some(source) => write!(f, "{source}"),
                None => f.write_str("unknown error"),
            }
        }
    }
}

impl std::error::Error for StatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// Find the first non-zero HTTP status in an error chain.
pub fn status_code_of(err: &(dyn std::error::Error + 'static)) -> Option<u16> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(status) = err.downcast_ref::<StatusError>() {
            if status.status != 0 {
                return Some(status.status);
            }
        }
        current = err.source();
    }
    None
}

fn has_status(err: &(dyn std::error::Error + 'static), status: StatusCode) -> bool {
    status_code_of(err) == Some(status.as_u16())
}

/// Whether the chain carries a 400 Bad Request.
pub fn is_bad_request_error(err: &(dyn std::error::Error + 'static)) -> bool {
    has_status(err, StatusCode::BAD_REQUEST)
}

/// Whether the chain carries a 401 Unauthorized.
pub fn is_unauthorized_error(err: &(dyn std::error::Error + 'static)) -> bool {
    has_status(err, StatusCode::UNAUTHORIZED)
}

/// Whether the chain carries a 403 Forbidden.
pub fn is_forbidden_error(err: &(dyn std::error::Error + 'static)) -> bool {
    has_status(err, StatusCode::FORBIDDEN)
}

/// Whether the chain carries a 404 Not Found.
pub fn is_not_found_error(err: &(dyn std::error::Error + 'static)) -> bool {
    has_status(err, StatusCode::NOT_FOUND)
}

/// Whether the chain carries a 500 Internal Server Error.
pub fn is_internal_server_error(err: &(dyn std::error::Error + 'static)) -> bool {
    has_status(err, StatusCode::INTERNAL_SERVER_ERROR)
}
