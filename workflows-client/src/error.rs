//! Error types for the workflows client.

use std::fmt;
use thiserror::Error;
use workflows_core::v1::{ErrorBody, UnexpectedResponse};
use workflows_core::{BoxError, StatusError, TransportError, status_code_of};

/// The single error type returned by every client operation.
///
/// Renders as `workflows`, then `: <message>` when the message is non-empty,
/// then `: <source>` when a source is present.
///
/// Errors built with [`Error::api`] wrap a [`StatusError`], so the status
/// predicates (e.g. [`is_not_found_error`](crate::is_not_found_error)) can
/// find the HTTP status through [`source`](std::error::Error::source).
///
/// # Example
///
/// ```
/// use workflows_client::{Error, MessageError, is_not_found_error};
///
/// let err = Error::api(
///     "Workflow.Delete",
///     404,
///     Some(Box::new(MessageError("no such workflow".to_string()))),
/// );
/// assert_eq!(
///     err.to_string(),
///     "workflows: Workflow.Delete: 404 Not Found: no such workflow"
/// );
/// assert!(is_not_found_error(&err));
/// ```
#[derive(Debug)]
pub struct Error {
    msg: String,
    source: Option<BoxError>,
    transparent: bool,
}

impl Error {
    /// Create an error from a message and an optional cause.
    pub fn new(msg: impl Into<String>, source: Option<BoxError>) -> Self {
        Self {
            msg: msg.into(),
            source,
            transparent: false,
        }
    }

    /// Pass `inner` through unchanged: `Display` and `source` are those of
    /// `inner` itself, with no namespace prefix.
    pub(crate) fn transparent(inner: BoxError) -> Self {
        Self {
            msg: String::new(),
            source: Some(inner),
            transparent: true,
        }
    }

    /// The wrapped cause, if any.
    ///
    /// For errors passed through from the transport this is the transport's
    /// own error.
    pub fn get_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Create an error for a failed API operation.
    ///
    /// `operation` becomes the message; `status` and `source` are packed into
    /// a [`StatusError`]. A status of `0` marks a failure that did not come
    /// from an HTTP response.
    pub fn api(operation: impl Into<String>, status: u16, source: Option<BoxError>) -> Self {
        Self::new(operation, Some(Box::new(StatusError::new(status, source))))
    }

    /// The message, without the namespace prefix or the cause.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// The first non-zero HTTP status in the cause chain.
    pub fn status_code(&self) -> Option<u16> {
        status_code_of(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(inner), true) = (&self.source, self.transparent) {
            return fmt::Display::fmt(inner, f);
        }
        f.write_str("workflows")?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match (&self.source, self.transparent) {
            (Some(inner), true) => inner.source(),
            (source, _) => source
                .as_deref()
                .map(|source| source as &(dyn std::error::Error + 'static)),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A message-only error, used for server-provided failure text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MessageError(pub String);

/// The server answered with a status the operation does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected response status {status}: {body}")]
pub struct UnexpectedStatusError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw body text.
    pub body: String,
}

pub(crate) fn api_failure(operation: &'static str, status: u16, body: ErrorBody) -> Error {
    tracing::debug!(operation, status, message = %body.message, "workflows API call failed");
    Error::api(operation, status, Some(Box::new(MessageError(body.message))))
}

pub(crate) fn transport_failure(operation: &'static str, err: TransportError) -> Error {
    tracing::debug!(operation, error = %err, "workflows API call did not complete");
    Error::api(operation, 0, Some(Box::new(err)))
}

pub(crate) fn unexpected_response(operation: &'static str, response: UnexpectedResponse) -> Error {
    tracing::warn!(
        operation,
        status = response.status,
        "workflows API returned an undeclared status"
    );
    Error::api(
        operation,
        0,
        Some(Box::new(UnexpectedStatusError {
            status: response.status,
            body: response.body,
        })),
    )
}

pub(crate) fn unrecognized_response(operation: &'static str) -> Error {
    tracing::warn!(operation, "workflows API returned an unrecognized response");
    Error::api(
        operation,
        0,
        Some(Box::new(MessageError(
            "unrecognized response variant".to_string(),
        ))),
    )
}
