//! HTTP implementation of [`Operations`].

use super::operations::{OperationFuture, OperationName, Operations};
use super::params::{
    ExecutionParams, ListExecutionsParams, ListRevisionsParams, ListWorkflowSuggestParams,
    ListWorkflowsParams, RevisionParams, WorkflowParams,
};
use super::responses::{
    CancelExecutionResponse, CreateExecutionResponse, CreateRevisionResponse,
    CreateSubscriptionResponse, CreateWorkflowResponse, DecodeResponse, DeleteExecutionResponse,
    DeleteRevisionAliasResponse, DeleteSubscriptionResponse, DeleteWorkflowResponse,
    GetExecutionResponse, GetRevisionResponse, GetSubscriptionResponse, GetWorkflowResponse,
    ListExecutionHistoryResponse, ListExecutionsResponse, ListPlansResponse,
    ListRevisionsResponse, ListWorkflowSuggestResponse, ListWorkflowsResponse,
    UpdateRevisionAliasResponse, UpdateWorkflowResponse,
};
use super::types::{
    CreateExecutionRequest, CreateRevisionRequest, CreateSubscriptionRequest,
    CreateWorkflowRequest, UpdateRevisionAliasRequest, UpdateWorkflowRequest,
};
use crate::error::{Result, TransportError};
use crate::transport::{Credentials, HttpRequest, HttpTransport, Method};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Supplies per-operation credentials to the [`ApiClient`].
pub trait SecuritySource: Send + Sync {
    /// Credentials for `operation`, or `None` to leave the request as is.
    fn api_key_auth(&self, operation: OperationName) -> Result<Option<Credentials>>;
}

/// Security source that supplies nothing.
///
/// Used when the transport authenticates on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidSecuritySource;

impl SecuritySource for VoidSecuritySource {
    fn api_key_auth(&self, _operation: OperationName) -> Result<Option<Credentials>> {
        Ok(None)
    }
}

/// Client for the v1 API over an [`HttpTransport`].
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    /// API root, e.g. `https://example.com/api/workflow/1.0/`.
    root_url: String,
    security: Arc<dyn SecuritySource>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("root_url", &self.root_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client rooted at `root_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if the URL is not `http://` or
    /// `https://`.
    pub fn new(
        root_url: impl Into<String>,
        security: impl SecuritySource + 'static,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        let root_url = root_url.into();

        if !root_url.starts_with("http://") && !root_url.starts_with("https://") {
            return Err(TransportError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                root_url
            )));
        }

        Ok(Self {
            root_url,
            security: Arc::new(security),
            transport,
        })
    }

    /// The API root URL.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.root_url.trim_end_matches('/'), path)
    }

    async fn send<R: DecodeResponse>(
        &self,
        operation: OperationName,
        method: Method,
        path: String,
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        let mut request = HttpRequest::new(method, self.url(&path));
        request
            .headers
            .insert("accept".to_string(), "application/json".to_string());
        if body.is_some() {
            request
                .headers
                .insert("content-type".to_string(), "application/json".to_string());
        }
        request.body = body;
        request.credentials = self.security.api_key_auth(operation)?;

        let method = request.method.clone();
        let response = self.transport.request(request).await?;

        tracing::debug!(
            operation = operation.as_str(),
            method = %method,
            path = %path,
            status = response.status,
            "workflows API call completed"
        );

        R::decode(response)
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(TransportError::Encode)
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn with_query(path: String, pairs: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

fn workflow_path(id: &str) -> String {
    format!("workflows/{}", segment(id))
}

fn revision_path(params: &RevisionParams) -> String {
    format!("{}/revisions/{}", workflow_path(&params.id), params.revision_id)
}

fn execution_path(params: &ExecutionParams) -> String {
    format!(
        "{}/executions/{}",
        workflow_path(&params.id),
        segment(&params.execution_id)
    )
}

impl Operations for ApiClient {
    fn create_workflow(
        &self,
        request: CreateWorkflowRequest,
    ) -> OperationFuture<'_, CreateWorkflowResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::CreateWorkflow,
                Method::POST,
                "workflows".to_string(),
                Some(body),
            )
            .await
        })
    }

    fn list_workflows(
        &self,
        params: ListWorkflowsParams,
    ) -> OperationFuture<'_, ListWorkflowsResponse> {
        Box::pin(async move {
            let path = with_query(
                "workflows".to_string(),
                &[
                    ("offset", params.offset.map(|v| v.to_string())),
                    ("limit", params.limit.map(|v| v.to_string())),
                    ("name", params.name),
                ],
            );
            self.send(OperationName::ListWorkflows, Method::GET, path, None)
                .await
        })
    }

    fn list_workflow_suggest(
        &self,
        params: ListWorkflowSuggestParams,
    ) -> OperationFuture<'_, ListWorkflowSuggestResponse> {
        Box::pin(async move {
            let path = with_query(
                "workflows/suggest".to_string(),
                &[("name", Some(params.name))],
            );
            self.send(OperationName::ListWorkflowSuggest, Method::GET, path, None)
                .await
        })
    }

    fn get_workflow(&self, params: WorkflowParams) -> OperationFuture<'_, GetWorkflowResponse> {
        Box::pin(async move {
            self.send(
                OperationName::GetWorkflow,
                Method::GET,
                workflow_path(&params.id),
                None,
            )
            .await
        })
    }

    fn update_workflow(
        &self,
        request: UpdateWorkflowRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, UpdateWorkflowResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::UpdateWorkflow,
                Method::PATCH,
                workflow_path(&params.id),
                Some(body),
            )
            .await
        })
    }

    fn delete_workflow(
        &self,
        params: WorkflowParams,
    ) -> OperationFuture<'_, DeleteWorkflowResponse> {
        Box::pin(async move {
            self.send(
                OperationName::DeleteWorkflow,
                Method::DELETE,
                workflow_path(&params.id),
                None,
            )
            .await
        })
    }

    fn create_workflow_revision(
        &self,
        request: CreateRevisionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateRevisionResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::CreateWorkflowRevision,
                Method::POST,
                format!("{}/revisions", workflow_path(&params.id)),
                Some(body),
            )
            .await
        })
    }

    fn list_workflow_revisions(
        &self,
        params: ListRevisionsParams,
    ) -> OperationFuture<'_, ListRevisionsResponse> {
        Box::pin(async move {
            let path = with_query(
                format!("{}/revisions", workflow_path(&params.id)),
                &[
                    ("offset", params.offset.map(|v| v.to_string())),
                    ("limit", params.limit.map(|v| v.to_string())),
                ],
            );
            self.send(OperationName::ListWorkflowRevisions, Method::GET, path, None)
                .await
        })
    }

    fn get_workflow_revision(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, GetRevisionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::GetWorkflowRevision,
                Method::GET,
                revision_path(&params),
                None,
            )
            .await
        })
    }

    fn update_workflow_revision_alias(
        &self,
        request: UpdateRevisionAliasRequest,
        params: RevisionParams,
    ) -> OperationFuture<'_, UpdateRevisionAliasResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::UpdateWorkflowRevisionAlias,
                Method::PUT,
                format!("{}/alias", revision_path(&params)),
                Some(body),
            )
            .await
        })
    }

    fn delete_workflow_revision_alias(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, DeleteRevisionAliasResponse> {
        Box::pin(async move {
            self.send(
                OperationName::DeleteWorkflowRevisionAlias,
                Method::DELETE,
                format!("{}/alias", revision_path(&params)),
                None,
            )
            .await
        })
    }

    fn create_execution(
        &self,
        request: CreateExecutionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateExecutionResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::CreateExecution,
                Method::POST,
                format!("{}/executions", workflow_path(&params.id)),
                Some(body),
            )
            .await
        })
    }

    fn list_executions(
        &self,
        params: ListExecutionsParams,
    ) -> OperationFuture<'_, ListExecutionsResponse> {
        Box::pin(async move {
            let path = with_query(
                format!("{}/executions", workflow_path(&params.id)),
                &[
                    ("offset", params.offset.map(|v| v.to_string())),
                    ("limit", params.limit.map(|v| v.to_string())),
                ],
            );
            self.send(OperationName::ListExecutions, Method::GET, path, None)
                .await
        })
    }

    fn get_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, GetExecutionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::GetExecution,
                Method::GET,
                execution_path(&params),
                None,
            )
            .await
        })
    }

    fn cancel_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, CancelExecutionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::CancelExecution,
                Method::POST,
                format!("{}/cancel", execution_path(&params)),
                None,
            )
            .await
        })
    }

    fn delete_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, DeleteExecutionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::DeleteExecution,
                Method::DELETE,
                execution_path(&params),
                None,
            )
            .await
        })
    }

    fn list_execution_history(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, ListExecutionHistoryResponse> {
        Box::pin(async move {
            self.send(
                OperationName::ListExecutionHistory,
                Method::GET,
                format!("{}/history", execution_path(&params)),
                None,
            )
            .await
        })
    }

    fn list_plans(&self) -> OperationFuture<'_, ListPlansResponse> {
        Box::pin(async move {
            self.send(OperationName::ListPlans, Method::GET, "plans".to_string(), None)
                .await
        })
    }

    fn get_subscription(&self) -> OperationFuture<'_, GetSubscriptionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::GetSubscription,
                Method::GET,
                "subscription".to_string(),
                None,
            )
            .await
        })
    }

    fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> OperationFuture<'_, CreateSubscriptionResponse> {
        Box::pin(async move {
            let body = encode(&request)?;
            self.send(
                OperationName::CreateSubscription,
                Method::POST,
                "subscription".to_string(),
                Some(body),
            )
            .await
        })
    }

    fn delete_subscription(&self) -> OperationFuture<'_, DeleteSubscriptionResponse> {
        Box::pin(async move {
            self.send(
                OperationName::DeleteSubscription,
                Method::DELETE,
                "subscription".to_string(),
                None,
            )
            .await
        })
    }
}
