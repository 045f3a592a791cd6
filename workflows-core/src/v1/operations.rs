//! The low-level operation contract.

use super::params::{
    ExecutionParams, ListExecutionsParams, ListRevisionsParams, ListWorkflowSuggestParams,
    ListWorkflowsParams, RevisionParams, WorkflowParams,
};
use super::responses::{
    CancelExecutionResponse, CreateExecutionResponse, CreateRevisionResponse,
    CreateSubscriptionResponse, CreateWorkflowResponse, DeleteExecutionResponse,
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
use crate::error::TransportError;
use std::future::Future;
use std::pin::Pin;

/// Future returned by every [`Operations`] method.
pub type OperationFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, TransportError>> + Send + 'a>>;

/// Names of the remote operations, passed to a
/// [`SecuritySource`](super::SecuritySource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OperationName {
    CreateWorkflow,
    ListWorkflows,
    ListWorkflowSuggest,
    GetWorkflow,
    UpdateWorkflow,
    DeleteWorkflow,
    CreateWorkflowRevision,
    ListWorkflowRevisions,
    GetWorkflowRevision,
    UpdateWorkflowRevisionAlias,
    DeleteWorkflowRevisionAlias,
    CreateExecution,
    ListExecutions,
    GetExecution,
    CancelExecution,
    DeleteExecution,
    ListExecutionHistory,
    ListPlans,
    GetSubscription,
    CreateSubscription,
    DeleteSubscription,
}

impl OperationName {
    /// Operation name as used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateWorkflow => "CreateWorkflow",
            Self::ListWorkflows => "ListWorkflows",
            Self::ListWorkflowSuggest => "ListWorkflowSuggest",
            Self::GetWorkflow => "GetWorkflow",
            Self::UpdateWorkflow => "UpdateWorkflow",
            Self::DeleteWorkflow => "DeleteWorkflow",
            Self::CreateWorkflowRevision => "CreateWorkflowRevision",
            Self::ListWorkflowRevisions => "ListWorkflowRevisions",
            Self::GetWorkflowRevision => "GetWorkflowRevision",
            Self::UpdateWorkflowRevisionAlias => "UpdateWorkflowRevisionAlias",
            Self::DeleteWorkflowRevisionAlias => "DeleteWorkflowRevisionAlias",
            Self::CreateExecution => "CreateExecution",
            Self::ListExecutions => "ListExecutions",
            Self::GetExecution => "GetExecution",
            Self::CancelExecution => "CancelExecution",
            Self::DeleteExecution => "DeleteExecution",
            Self::ListExecutionHistory => "ListExecutionHistory",
            Self::ListPlans => "ListPlans",
            Self::GetSubscription => "GetSubscription",
            Self::CreateSubscription => "CreateSubscription",
            Self::DeleteSubscription => "DeleteSubscription",
        }
    }
}

/// One method per remote operation.
///
/// Implementations send exactly one request per call and never retry.
/// `Err` means the round trip itself failed; every answer the server gave is
/// an `Ok` carrying the matching response variant.
pub trait Operations: Send + Sync {
    /// `POST workflows`
    fn create_workflow(
        &self,
        request: CreateWorkflowRequest,
    ) -> OperationFuture<'_, CreateWorkflowResponse>;

    /// `GET workflows`
    fn list_workflows(
        &self,
        params: ListWorkflowsParams,
    ) -> OperationFuture<'_, ListWorkflowsResponse>;

    /// `GET workflows/suggest`
    fn list_workflow_suggest(
        &self,
        params: ListWorkflowSuggestParams,
    ) -> OperationFuture<'_, ListWorkflowSuggestResponse>;

    /// `GET workflows/{id}`
    fn get_workflow(&self, params: WorkflowParams) -> OperationFuture<'_, GetWorkflowResponse>;

    /// `PATCH workflows/{id}`
    fn update_workflow(
        &self,
        request: UpdateWorkflowRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, UpdateWorkflowResponse>;

    /// `DELETE workflows/{id}`
    fn delete_workflow(&self, params: WorkflowParams)
    -> OperationFuture<'_, DeleteWorkflowResponse>;

    /// `POST workflows/{id}/revisions`
    fn create_workflow_revision(
        &self,
        request: CreateRevisionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateRevisionResponse>;

    /// `GET workflows/{id}/revisions`
    fn list_workflow_revisions(
        &self,
        params: ListRevisionsParams,
    ) -> OperationFuture<'_, ListRevisionsResponse>;

    /// `GET workflows/{id}/revisions/{revisionId}`
    fn get_workflow_revision(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, GetRevisionResponse>;

    /// `PUT workflows/{id}/revisions/{revisionId}/alias`
    fn update_workflow_revision_alias(
        &self,
        request: UpdateRevisionAliasRequest,
        params: RevisionParams,
    ) -> OperationFuture<'_, UpdateRevisionAliasResponse>;

    /// `DELETE workflows/{id}/revisions/{revisionId}/alias`
    fn delete_workflow_revision_alias(
        &self,
        params: RevisionParams,
    ) -> OperationFuture<'_, DeleteRevisionAliasResponse>;

    /// `POST workflows/{id}/executions`
    fn create_execution(
        &self,
        request: CreateExecutionRequest,
        params: WorkflowParams,
    ) -> OperationFuture<'_, CreateExecutionResponse>;

    /// `GET workflows/{id}/executions`
    fn list_executions(
        &self,
        params: ListExecutionsParams,
    ) -> OperationFuture<'_, ListExecutionsResponse>;

    /// `GET workflows/{id}/executions/{executionId}`
    fn get_execution(&self, params: ExecutionParams)
    -> OperationFuture<'_, GetExecutionResponse>;

    /// `POST workflows/{id}/executions/{executionId}/cancel`
    fn cancel_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, CancelExecutionResponse>;

    /// `DELETE workflows/{id}/executions/{executionId}`
    fn delete_execution(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, DeleteExecutionResponse>;

    /// `GET workflows/{id}/executions/{executionId}/history`
    fn list_execution_history(
        &self,
        params: ExecutionParams,
    ) -> OperationFuture<'_, ListExecutionHistoryResponse>;

    /// `GET plans`
    fn list_plans(&self) -> OperationFuture<'_, ListPlansResponse>;

    /// `GET subscription`
    fn get_subscription(&self) -> OperationFuture<'_, GetSubscriptionResponse>;

    /// `POST subscription`
    fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> OperationFuture<'_, CreateSubscriptionResponse>;

    /// `DELETE subscription`
    fn delete_subscription(&self) -> OperationFuture<'_, DeleteSubscriptionResponse>;
}
