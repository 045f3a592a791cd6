//! reqwest-backed transport.

use super::{
    ClientOption, ClientOptionApi, Credentials, HttpError, HttpRequest, HttpResponse,
    HttpTransport, TransportFuture,
};
use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderValue, USER_AGENT};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport that makes real network requests.
///
/// Credentials configured with [`with_credentials`](Self::with_credentials)
/// are only sent once the transport has been duplicated with
/// [`ClientOption::ForceAutomaticAuthentication`]. Until then, only
/// credentials carried on the request itself are used.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use workflows_core::transport::{Credentials, HttpClient};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpClient::new()?
///     .with_credentials(Credentials::new("token", "secret"))
///     .with_timeout(Duration::from_secs(60))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Underlying HTTP client (cheap to clone).
    http: ReqwestClient,
    /// `User-Agent` applied by [`ClientOption::UserAgent`].
    user_agent: Option<String>,
    /// Credentials attached under forced automatic authentication.
    credentials: Option<Credentials>,
    force_automatic_authentication: bool,
}

impl HttpClient {
    /// Create a transport with a 30 second timeout and no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, HttpError> {
        Ok(Self {
            http: build_http(DEFAULT_TIMEOUT)?,
            user_agent: None,
            credentials: None,
            force_automatic_authentication: false,
        })
    }

    /// Create a transport with credentials read from the environment.
    ///
    /// Missing variables are not an error; the transport just has no
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, HttpError> {
        let mut client = Self::new()?;
        client.credentials = Credentials::from_env();
        Ok(client)
    }

    /// Set the credentials used under forced automatic authentication.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timeout for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, HttpError> {
        self.http = build_http(timeout)?;
        Ok(self)
    }

    fn effective_credentials<'a>(&'a self, request: &'a HttpRequest) -> Option<&'a Credentials> {
        if self.force_automatic_authentication {
            self.credentials.as_ref().or(request.credentials.as_ref())
        } else {
            request.credentials.as_ref()
        }
    }
}

fn build_http(timeout: Duration) -> Result<ReqwestClient, HttpError> {
    ReqwestClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HttpError::Other(format!("Failed to build HTTP client: {e}")))
}

fn classify(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

impl HttpTransport for HttpClient {
    fn request(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let mut builder = self.http.request(request.method.clone(), &request.url);

            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            if let Some(ref user_agent) = self.user_agent {
                builder = builder.header(USER_AGENT, user_agent.as_str());
            }
            if let Some(credentials) = self.effective_credentials(&request) {
                builder = builder.basic_auth(
                    &credentials.access_token,
                    Some(&credentials.access_token_secret),
                );
            }
            if let Some(body) = request.body.clone() {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                tracing::debug!(method = %request.method, url = %request.url, error = %e, "HTTP request failed");
                classify(e)
            })?;

            let status = response.status().as_u16();
            let mut headers = HashMap::new();
            for (name, value) in response.headers() {
                if let Ok(value) = value.to_str() {
                    headers.insert(name.to_string(), value.to_string());
                }
            }
            let body = response.bytes().await.map_err(classify)?.to_vec();

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }

    fn option_api(&self) -> Option<&dyn ClientOptionApi> {
        Some(self)
    }
}

impl ClientOptionApi for HttpClient {
    fn dup_with(&self, options: &[ClientOption]) -> Result<Arc<dyn HttpTransport>, HttpError> {
        let mut dup = self.clone();
        for option in options {
            match option {
                ClientOption::UserAgent(user_agent) => {
                    HeaderValue::from_str(user_agent)
                        .map_err(|e| HttpError::InvalidOption(format!("user agent: {e}")))?;
                    dup.user_agent = Some(user_agent.clone());
                }
                ClientOption::ForceAutomaticAuthentication => {
                    dup.force_automatic_authentication = true;
                    if dup.credentials.is_none() {
                        dup.credentials = Credentials::from_env();
                    }
                }
            }
        }
        Ok(Arc::new(dup))
    }
}
