//! Shared test fixtures: a scripted [`Operations`] stub and sample payloads.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use workflows_client::transport::HttpError;
use workflows_client::v1::*;
use workflows_core::TransportError;

/// Build a failure variant for each declared status of `$resp`.
macro_rules! failure_cases {
    ($resp:ident) => {
        [
            (400u16, $resp::BadRequest(common::error_body())),
            (401u16, $resp::Unauthorized(common::error_body())),
            (403u16, $resp::Forbidden(common::error_body())),
            (404u16, $resp::NotFound(common::error_body())),
            (500u16, $resp::InternalServerError(common::error_body())),
        ]
    };
}

pub const SERVER_MESSAGE: &str = "server says no";

enum Reply {
    Respond(Box<dyn Any + Send + Sync>),
    Fail(HttpError),
}

/// An [`Operations`] implementation answering from a script.
///
/// Operations without a scripted reply fail like an unmatched mock request.
#[derive(Default)]
pub struct StubOperations {
    replies: Mutex<HashMap<OperationName, Reply>>,
    calls: Mutex<Vec<(OperationName, String)>>,
}

impl StubOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `response` on every call.
    pub fn on<T: Clone + Send + Sync + 'static>(self, operation: OperationName, response: T) -> Self {
        self.replies
            .lock()
            .insert(operation, Reply::Respond(Box::new(response)));
        self
    }

    /// Fail `operation` at the transport level.
    pub fn fail(self, operation: OperationName, err: HttpError) -> Self {
        self.replies.lock().insert(operation, Reply::Fail(err));
        self
    }

    /// Every call made, with its arguments in debug form.
    pub fn calls(&self) -> Vec<(OperationName, String)> {
        self.calls.lock().clone()
    }

    fn reply<T: Clone + 'static>(
        &self,
        operation: OperationName,
        args: &dyn Debug,
    ) -> Result<T, TransportError> {
        self.calls.lock().push((operation, format!("{args:?}")));

        match self.replies.lock().get(&operation) {
            Some(Reply::Respond(response)) => Ok(response
                .downcast_ref::<T>()
                .unwrap_or_else(|| panic!("scripted reply for {operation:?} has the wrong type"))
                .clone()),
            Some(Reply::Fail(err)) => Err(TransportError::Http(err.clone())),
            None => Err(TransportError::Http(HttpError::NoMockMatch {
                method: operation.as_str().to_string(),
                url: String::new(),
            })),
        }
    }
}

impl Operations for StubOperations {
    fn create_workflow(
        &self,
        request: CreateWorkflowRequest,
    ) -> OperationFuture<'_, CreateWorkflowResponse> {
        let result = self.reply(OperationName::CreateWorkflow, &request);
        Box::pin(async move { result })
    }

    fn list_workflows(
        &self,
        params: ListWorkflowsParams,
    ) -> OperationFuture<'_, ListWorkflowsResponse> {
        let result = self.reply(OperationName::ListWorkflows, &params);
        Box::pin(async move { result })
    }

    fn list_workflow_suggest(
        &self,
        params: ListWorkflowSuggestParams,
    ) -> OperationFuture<'_, ListWorkflowSuggestResponse> {
        let result = self.reply(OperationName::ListWorkflowSuggest, &params);
        Box::pin(async move { result })
    }

    fn get_workflow(&self, params: WorkflowParams) -> OperationFuture<'_, GetWorkflowResponse> {
        let result = self.reply(OperationName::GetWorkflow, &params);
        Box::pin(async move { result })
    }

    fn update_workflow(
        &self,
        request: UpdateWorkflowRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, UpdateWorkflowResponse> {
        let result = self.reply(OperationName::UpdateWorkflow, &(request, params));
        Box::pin(async move { result })
    }

    fn delete_workflow(
        &self,
        params: WorkflowParams,
    ) -> OperationFuture<'_, DeleteWorkflowResponse> {
        let result = self.reply(OperationName::DeleteWorkflow, &params);
        Box::pin(async move { result })
    }

    fn create_workflow_revision(
        &self,
        request: CreateRevisionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateRevisionResponse> {
        let result = self.reply(OperationName::CreateWorkflowRevision, &(request, params));
        Box::pin(async move { result })
    }

    fn list_workflow_revisions(
        &self,
        params: ListRevisionsParams,
    ) -> OperationFuture<'_, ListRevisionsResponse> {
        let result = self.reply(OperationName::ListWorkflowRevisions, &params);
        Box::pin(async move { result })
    }

    fn get_workflow_revision(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, GetRevisionResponse> {
        let result = self.reply(OperationName::GetWorkflowRevision, &params);
        Box::pin(async move { result })
    }

    fn update_workflow_revision_alias(
        &self,
        request: UpdateRevisionAliasRequest,
        params: RevisionParams,
    ) -> OperationFuture<'_, UpdateRevisionAliasResponse> {
        let result = self.reply(
            OperationName::UpdateWorkflowRevisionAlias,
            &(request, params),
        );
        Box::pin(async move { result })
    }

    fn delete_workflow_revision_alias(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, DeleteRevisionAliasResponse> {
        let result = self.reply(OperationName::DeleteWorkflowRevisionAlias, &params);
        Box::pin(async move { result })
    }

    fn create_execution(
        &self,
        request: CreateExecutionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateExecutionResponse> {
        let result = self.reply(OperationName::CreateExecution, &(request, params));
        Box::pin(async move { result })
    }

    fn list_executions(
        &self,
        params: ListExecutionsParams,
    ) -> OperationFuture<'_, ListExecutionsResponse> {
        let result = self.reply(OperationName::ListExecutions, &params);
        Box::pin(async move { result })
    }

    fn get_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, GetExecutionResponse> {
        let result = self.reply(OperationName::GetExecution, &params);
        Box::pin(async move { result })
    }

    fn cancel_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, CancelExecutionResponse> {
        let result = self.reply(OperationName::CancelExecution, &params);
        Box::pin(async move { result })
    }

    fn delete_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, DeleteExecutionResponse> {
        let result = self.reply(OperationName::DeleteExecution, &params);
        Box::pin(async move { result })
    }

    fn list_execution_history(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, ListExecutionHistoryResponse> {
        let result = self.reply(OperationName::ListExecutionHistory, &params);
        Box::pin(async move { result })
    }

    fn list_plans(&self) -> OperationFuture<'_, ListPlansResponse> {
        let result = self.reply(OperationName::ListPlans, &());
        Box::pin(async move { result })
    }

    fn get_subscription(&self) -> OperationFuture<'_, GetSubscriptionResponse> {
        let result = self.reply(OperationName::GetSubscription, &());
        Box::pin(async move { result })
    }

    fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> OperationFuture<'_, CreateSubscriptionResponse> {
        let result = self.reply(OperationName::CreateSubscription, &request);
        Box::pin(async move { result })
    }

    fn delete_subscription(&self) -> OperationFuture<'_, DeleteSubscriptionResponse> {
        let result = self.reply(OperationName::DeleteSubscription, &());
        Box::pin(async move { result })
    }
}

// =============================================================================
// Assertions
// =============================================================================

/// Check that every declared failure of `operation` maps to an error with
/// that status, the verb name as message, and the server text.
pub async fn assert_declared_failures<R, T, F, Fut>(
    operation: OperationName,
    verb: &str,
    cases: [(u16, R); 5],
    call: F,
) where
    R: Clone + Send + Sync + 'static,
    T: Debug,
    F: Fn(Arc<StubOperations>) -> Fut,
    Fut: Future<Output = workflows_client::Result<T>>,
{
    for (status, response) in cases {
        let stub = Arc::new(StubOperations::new().on(operation, response));
        let err = call(stub).await.unwrap_err();

        assert_eq!(err.status_code(), Some(status), "{verb} / {status}");
        assert_eq!(err.message(), verb);
        assert!(err.to_string().starts_with(&format!("workflows: {verb}: {status}")));
        assert!(err.to_string().ends_with(SERVER_MESSAGE), "{err}");
    }
}

/// Check that a transport failure and an undeclared response both map to an
/// error without status.
pub async fn assert_statusless_failures<R, T, F, Fut>(
    operation: OperationName,
    verb: &str,
    unexpected: R,
    call: F,
) where
    R: Clone + Send + Sync + 'static,
    T: Debug,
    F: Fn(Arc<StubOperations>) -> Fut,
    Fut: Future<Output = workflows_client::Result<T>>,
{
    let stub = Arc::new(
        StubOperations::new().fail(operation, HttpError::ConnectionFailed("refused".to_string())),
    );
    let err = call(stub).await.unwrap_err();
    assert_eq!(err.status_code(), None);
    assert_eq!(
        err.to_string(),
        format!("workflows: {verb}: HTTP request failed: Connection failed: refused")
    );

    let stub = Arc::new(StubOperations::new().on(operation, unexpected));
    let err = call(stub).await.unwrap_err();
    assert_eq!(err.status_code(), None);
    assert_eq!(err.message(), verb);
    assert!(err.to_string().contains("unexpected response status 418"), "{err}");
}

// =============================================================================
// Payloads
// =============================================================================

pub fn error_body() -> ErrorBody {
    ErrorBody {
        message: SERVER_MESSAGE.to_string(),
    }
}

pub fn teapot() -> UnexpectedResponse {
    UnexpectedResponse {
        status: 418,
        body: "I'm a teapot".to_string(),
    }
}

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn workflow(id: &str, name: &str) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        publish: false,
        logging: false,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn revision(revision_id: i64, alias: Option<&str>) -> Revision {
    Revision {
        revision_id,
        workflow_id: "wf-1".to_string(),
        runbook: "steps: {}".to_string(),
        revision_alias: alias.map(str::to_string),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn execution(execution_id: &str, status: ExecutionStatus) -> Execution {
    Execution {
        execution_id: execution_id.to_string(),
        workflow: WorkflowSummary {
            id: "wf-1".to_string(),
            name: "w1".to_string(),
        },
        revision_id: Some(1),
        name: None,
        status,
        args: None,
        output: None,
        created_at: timestamp(),
        updated_at: timestamp(),
        started_at: None,
        finished_at: None,
    }
}
