//! Rule-based mock transport.
//!
//! Lets tests script API responses and inspect what the client sent, without
//! a network.

use crate::transport::{
    ClientOption, ClientOptionApi, Credentials, HttpError, HttpRequest, HttpResponse,
    HttpTransport, Method, TransportFuture,
};
use parking_lot::RwLock;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;

/// A rule for matching and responding to HTTP requests.
#[derive(Clone)]
pub struct MockHttpRule {
    /// HTTP method to match (None = any method).
    pub method: Option<Method>,
    /// URL pattern (regex).
    pub url_pattern: Regex,
    /// Response or transport failure to return.
    pub outcome: Result<HttpResponse, HttpError>,
    /// Simulated latency.
    pub latency: Option<Duration>,
    /// Number of times this rule should match (None = unlimited).
    pub times: Option<usize>,
    matched_count: usize,
}

impl MockHttpRule {
    /// Create a new rule matching any method.
    ///
    /// # Panics
    ///
    /// Panics if `url_pattern` is not a valid regex.
    pub fn new(url_pattern: &str, outcome: Result<HttpResponse, HttpError>) -> Self {
        Self {
            method: None,
            url_pattern: Regex::new(url_pattern).expect("Invalid URL regex pattern"),
            outcome,
            latency: None,
            times: None,
            matched_count: 0,
        }
    }

    /// Set the HTTP method to match.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set the number of times this rule should match.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    fn matches(&self, method: &Method, url: &str) -> bool {
        if let Some(ref expected) = self.method {
            if expected != method {
                return false;
            }
        }

        if let Some(limit) = self.times {
            if self.matched_count >= limit {
                return false;
            }
        }

        self.url_pattern.is_match(url)
    }
}

impl std::fmt::Debug for MockHttpRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpRule")
            .field("method", &self.method)
            .field("url_pattern", &self.url_pattern.as_str())
            .field(
                "response_status",
                &self.outcome.as_ref().map(|response| response.status),
            )
            .field("latency", &self.latency)
            .field("times", &self.times)
            .finish()
    }
}

/// State shared between a mock and every duplicate made from it.
#[derive(Default)]
struct Shared {
    rules: RwLock<Vec<MockHttpRule>>,
    requests: RwLock<Vec<HttpRequest>>,
    applied_options: RwLock<Vec<ClientOption>>,
}

/// Mock transport for testing.
///
/// Duplicates made through [`ClientOptionApi::dup_with`] share rules and the
/// request log with the original, so a test can keep a handle to the mock it
/// built and still see the traffic of the configured copy.
///
/// # Example
///
/// ```
/// use workflows_core::testing::MockHttp;
/// use serde_json::json;
///
/// let mock = MockHttp::new()
///     .on_get(r"/workflows/wf-1$")
///     .respond_json(200, json!({"workflow": {"id": "wf-1"}}))
///     .on_delete(r"/workflows/wf-1$")
///     .respond_error(404, "no such workflow");
/// ```
#[derive(Clone)]
pub struct MockHttp {
    shared: Arc<Shared>,
    fail_on_unmatched: bool,
    supports_options: bool,
    dup_error: Option<HttpError>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    force_automatic_authentication: bool,
}

impl MockHttp {
    /// Create a new mock transport.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared::default()),
            fail_on_unmatched: true,
            supports_options: true,
            dup_error: None,
            credentials: None,
            user_agent: None,
            force_automatic_authentication: false,
        }
    }

    /// Add a rule.
    pub fn rule(self, rule: MockHttpRule) -> Self {
        self.shared.rules.write().push(rule);
        self
    }

    /// Set whether to fail on unmatched requests.
    pub fn fail_on_unmatched(mut self, fail: bool) -> Self {
        self.fail_on_unmatched = fail;
        self
    }

    /// Do not expose the option-duplication capability.
    pub fn without_option_api(mut self) -> Self {
        self.supports_options = false;
        self
    }

    /// Make every `dup_with` call fail with `err`.
    pub fn fail_dup_with(mut self, err: HttpError) -> Self {
        self.dup_error = Some(err);
        self
    }

    /// Credentials attached once automatic authentication is forced.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    fn builder(self, method: Option<Method>, url_pattern: &str) -> MockHttpBuilder {
        MockHttpBuilder {
            mock: self,
            method,
            url_pattern: url_pattern.to_string(),
            latency: None,
            times: None,
        }
    }

    /// Fluent builder: start defining a GET rule.
    pub fn on_get(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(Some(Method::GET), url_pattern)
    }

    /// Fluent builder: start defining a POST rule.
    pub fn on_post(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(Some(Method::POST), url_pattern)
    }

    /// Fluent builder: start defining a PUT rule.
    pub fn on_put(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(Some(Method::PUT), url_pattern)
    }

    /// Fluent builder: start defining a PATCH rule.
    pub fn on_patch(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(Some(Method::PATCH), url_pattern)
    }

    /// Fluent builder: start defining a DELETE rule.
    pub fn on_delete(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(Some(Method::DELETE), url_pattern)
    }

    /// Fluent builder: start defining a rule matching any method.
    pub fn on_any(self, url_pattern: &str) -> MockHttpBuilder {
        self.builder(None, url_pattern)
    }

    /// Get all recorded requests, as they would have gone on the wire.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.shared.requests.read().clone()
    }

    /// Clear recorded requests.
    pub fn clear_requests(&self) {
        self.shared.requests.write().clear();
    }

    /// Whether a request with `method` and a URL matching `url_pattern` was made.
    ///
    /// # Panics
    ///
    /// Panics if `url_pattern` is not a valid regex.
    pub fn assert_request_made(&self, method: Method, url_pattern: &str) -> bool {
        let re = Regex::new(url_pattern).expect("Invalid URL pattern");
        self.shared
            .requests
            .read()
            .iter()
            .any(|r| r.method == method && re.is_match(&r.url))
    }

    /// Get the number of requests made.
    pub fn request_count(&self) -> usize {
        self.shared.requests.read().len()
    }

    /// Every option passed to `dup_with`, in order.
    pub fn applied_options(&self) -> Vec<ClientOption> {
        self.shared.applied_options.read().clone()
    }

    fn prepare(&self, mut request: HttpRequest) -> HttpRequest {
        if let Some(user_agent) = &self.user_agent {
            request
                .headers
                .insert("user-agent".to_string(), user_agent.clone());
        }
        if self.force_automatic_authentication && request.credentials.is_none() {
            request.credentials = self.credentials.clone();
        }
        request
    }
}

impl Default for MockHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for MockHttp {
    fn request(&self, request: HttpRequest) -> TransportFuture<'_> {
        let request = self.prepare(request);
        let method = request.method.clone();
        let url = request.url.clone();

        self.shared.requests.write().push(request);

        let mut rules = self.shared.rules.write();
        let matched = rules.iter_mut().find(|rule| rule.matches(&method, &url));

        match matched {
            Some(rule) => {
                rule.matched_count += 1;
                let outcome = rule.outcome.clone();
                let latency = rule.latency;

                Box::pin(async move {
                    if let Some(delay) = latency {
                        tokio::time::sleep(delay).await;
                    }
                    outcome
                })
            }
            None => {
                if self.fail_on_unmatched {
                    let method = method.to_string();
                    Box::pin(async move { Err(HttpError::NoMockMatch { method, url }) })
                } else {
                    Box::pin(async move { Ok(HttpResponse::new(404, b"Not Found".to_vec())) })
                }
            }
        }
    }

    fn option_api(&self) -> Option<&dyn ClientOptionApi> {
        if self.supports_options {
            Some(self)
        } else {
            None
        }
    }
}

impl ClientOptionApi for MockHttp {
    fn dup_with(&self, options: &[ClientOption]) -> Result<Arc<dyn HttpTransport>, HttpError> {
        if let Some(err) = &self.dup_error {
            return Err(err.clone());
        }

        let mut dup = self.clone();
        for option in options {
            match option {
                ClientOption::UserAgent(user_agent) => {
                    dup.user_agent = Some(user_agent.clone());
                }
                ClientOption::ForceAutomaticAuthentication => {
                    dup.force_automatic_authentication = true;
                }
            }
        }
        self.shared
            .applied_options
            .write()
            .extend(options.iter().cloned());

        Ok(Arc::new(dup))
    }
}

/// Builder for fluent mock rule creation.
pub struct MockHttpBuilder {
    mock: MockHttp,
    method: Option<Method>,
    url_pattern: String,
    latency: Option<Duration>,
    times: Option<usize>,
}

impl MockHttpBuilder {
    /// Set simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set the number of times this rule should match.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    fn finish(self, outcome: Result<HttpResponse, HttpError>) -> MockHttp {
        let mut rule = MockHttpRule::new(&self.url_pattern, outcome);
        rule.method = self.method;
        rule.latency = self.latency;
        rule.times = self.times;
        self.mock.rule(rule)
    }

    /// Set the response to return.
    pub fn respond(self, response: HttpResponse) -> MockHttp {
        self.finish(Ok(response))
    }

    /// Set a JSON response.
    pub fn respond_json(self, status: u16, value: serde_json::Value) -> MockHttp {
        self.respond(HttpResponse::json(status, &value))
    }

    /// Set a plain text response.
    pub fn respond_text(self, status: u16, text: &str) -> MockHttp {
        self.respond(
            HttpResponse::new(status, text.as_bytes().to_vec())
                .with_header("content-type", "text/plain"),
        )
    }

    /// Set a failure response with a `message` body.
    pub fn respond_error(self, status: u16, message: &str) -> MockHttp {
        self.respond_json(status, serde_json::json!({"message": message}))
    }

    /// Fail the round trip instead of responding.
    pub fn fail_with(self, err: HttpError) -> MockHttp {
        self.finish(Err(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(url: &str) -> HttpRequest {
        HttpRequest::new(Method::GET, url)
    }

    #[tokio::test]
    async fn mock_http_matches_method_and_url() {
        let mock = MockHttp::new()
            .on_get(r"^https://api\.example\.com/workflows/[\w-]+$")
            .respond_json(200, json!({"name": "w1"}))
            .on_post(r"^https://api\.example\.com/workflows$")
            .respond_json(201, json!({"id": "wf-1"}));

        let response = mock
            .request(get("https://api.example.com/workflows/wf-1"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let response = mock
            .request(HttpRequest::new(
                Method::POST,
                "https://api.example.com/workflows",
            ))
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn mock_http_fails_on_unmatched() {
        let mock = MockHttp::new()
            .on_get(r"^https://api\.example\.com/plans$")
            .respond_json(200, json!({"plans": []}));

        let result = mock.request(get("https://api.example.com/other")).await;
        assert!(matches!(result, Err(HttpError::NoMockMatch { .. })));
    }

    #[tokio::test]
    async fn mock_http_unmatched_can_return_404() {
        let mock = MockHttp::new().fail_on_unmatched(false);
        let response = mock.request(get("https://api.example.com/x")).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn mock_http_scripted_transport_failure() {
        let mock = MockHttp::new()
            .on_any(r".*")
            .fail_with(HttpError::ConnectionFailed("refused".to_string()));

        let result = mock.request(get("https://api.example.com/plans")).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn mock_http_times_limit() {
        let mock = MockHttp::new()
            .on_get(r"/plans$")
            .times(1)
            .respond_json(200, json!({"plans": []}));

        mock.request(get("https://api.example.com/plans")).await.unwrap();
        let result = mock.request(get("https://api.example.com/plans")).await;
        assert!(matches!(result, Err(HttpError::NoMockMatch { .. })));
    }

    #[tokio::test]
    async fn mock_http_dup_shares_log_and_applies_options() {
        let mock = MockHttp::new()
            .with_credentials(Credentials::new("token", "secret"))
            .on_any(r".*")
            .respond_json(200, json!({}));

        let dup = mock
            .dup_with(&[
                ClientOption::UserAgent("agent/1.0".to_string()),
                ClientOption::ForceAutomaticAuthentication,
            ])
            .unwrap();
        dup.request(get("https://api.example.com/plans")).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("user-agent").map(String::as_str),
            Some("agent/1.0")
        );
        assert_eq!(
            requests[0].credentials,
            Some(Credentials::new("token", "secret"))
        );
        assert_eq!(mock.applied_options().len(), 2);
        assert!(mock.assert_request_made(Method::GET, r"/plans$"));
    }

    #[tokio::test]
    async fn mock_http_original_is_not_configured_by_dup() {
        let mock = MockHttp::new()
            .with_credentials(Credentials::new("token", "secret"))
            .on_any(r".*")
            .respond_json(200, json!({}));

        let _dup = mock
            .dup_with(&[ClientOption::ForceAutomaticAuthentication])
            .unwrap();
        mock.request(get("https://api.example.com/plans")).await.unwrap();

        assert_eq!(mock.requests()[0].credentials, None);
    }

    #[test]
    fn mock_http_option_capability_can_be_removed() {
        assert!(MockHttp::new().option_api().is_some());
        assert!(MockHttp::new().without_option_api().option_api().is_none());
    }

    #[test]
    fn mock_http_dup_failure() {
        let mock = MockHttp::new().fail_dup_with(HttpError::InvalidOption("nope".to_string()));
        let result = mock.dup_with(&[ClientOption::ForceAutomaticAuthentication]);
        assert!(matches!(result, Err(HttpError::InvalidOption(_))));
        assert!(mock.applied_options().is_empty());
    }
}
