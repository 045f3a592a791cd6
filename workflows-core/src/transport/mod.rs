//! HTTP transport abstraction.
//!
//! [`HttpTransport`] is the handle the API client sends requests through.
//! Production code uses [`HttpClient`]; tests use
//! [`MockHttp`](crate::testing::MockHttp). A transport that supports
//! [`ClientOptionApi`] can be duplicated with extra options applied, which is
//! how the user agent and the authentication policy get attached.

mod http_client;

pub use http_client::HttpClient;

pub use reqwest::Method;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Environment variable holding the API access token.
pub const ACCESS_TOKEN_ENV: &str = "SAKURA_ACCESS_TOKEN";

/// Environment variable holding the API access token secret.
pub const ACCESS_TOKEN_SECRET_ENV: &str = "SAKURA_ACCESS_TOKEN_SECRET";

/// Future returned by [`HttpTransport::request`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;

/// HTTP response from a transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a JSON response.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string().into_bytes())
            .with_header("content-type", "application/json")
    }

    /// Get the body as a string.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP request handed to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Credentials supplied by the API client's security source, if any.
    pub credentials: Option<Credentials>,
}

impl HttpRequest {
    /// Create a request without headers, body or credentials.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            credentials: None,
        }
    }

    /// Get the body as a string.
    pub fn body_string(&self) -> String {
        self.body
            .as_deref()
            .map(|body| String::from_utf8_lossy(body).into_owned())
            .unwrap_or_default()
    }
}

/// Access token pair sent as HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access token (basic-auth user name).
    pub access_token: String,
    /// Access token secret (basic-auth password).
    pub access_token_secret: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(access_token: impl Into<String>, access_token_secret: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Read credentials from [`ACCESS_TOKEN_ENV`] and [`ACCESS_TOKEN_SECRET_ENV`].
    ///
    /// Returns `None` unless both variables are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV).ok()?;
        let secret = std::env::var(ACCESS_TOKEN_SECRET_ENV).ok()?;
        if token.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self::new(token, secret))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Error type for transport operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Request timed out.
    #[error("Request timed out")]
    Timeout,
    /// No mock rule matched.
    #[error("No mock rule matched for {method} {url}")]
    NoMockMatch {
        /// Method of the unmatched request.
        method: String,
        /// URL of the unmatched request.
        url: String,
    },
    /// A client option could not be applied.
    #[error("Invalid client option: {0}")]
    InvalidOption(String),
    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Options applied when duplicating a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Send this `User-Agent` on every request.
    UserAgent(String),
    /// Attach the transport's credentials to every request without waiting
    /// for the caller to supply them.
    ForceAutomaticAuthentication,
}

/// Provider trait for HTTP round trips.
pub trait HttpTransport: Send + Sync {
    /// Send one request and return the raw response.
    fn request(&self, request: HttpRequest) -> TransportFuture<'_>;

    /// The option-duplication capability, when the transport supports it.
    fn option_api(&self) -> Option<&dyn ClientOptionApi> {
        None
    }
}

/// Capability to clone a transport with extra options applied.
///
/// The original transport is left untouched.
pub trait ClientOptionApi: Send + Sync {
    /// Return a copy of this transport with `options` applied in order.
    fn dup_with(&self, options: &[ClientOption]) -> Result<Arc<dyn HttpTransport>, HttpError>;
}
