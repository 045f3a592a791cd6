//! Version 1 of the workflows API.
//!
//! [`Operations`] is the low-level contract: one method per remote
//! operation, each resolving to a closed response enum. [`ApiClient`] is its
//! HTTP implementation.

mod client;
mod operations;
mod params;
mod responses;
mod types;

pub use client::{ApiClient, SecuritySource, VoidSecuritySource};
pub use operations::{OperationFuture, OperationName, Operations};
pub use params::{
    ExecutionParams, ListExecutionsParams, ListRevisionsParams, ListWorkflowSuggestParams,
    ListWorkflowsParams, RevisionParams, WorkflowParams,
};
pub use responses::{
    CancelExecutionResponse, CreateExecutionResponse, CreateRevisionResponse,
    CreateSubscriptionResponse, CreateWorkflowResponse, DeleteExecutionResponse,
    DeleteRevisionAliasResponse, DeleteSubscriptionResponse, DeleteWorkflowResponse,
    GetExecutionResponse, GetRevisionResponse, GetSubscriptionResponse, GetWorkflowResponse,
    ListExecutionHistoryResponse, ListExecutionsResponse, ListPlansResponse,
    ListRevisionsResponse, ListWorkflowSuggestResponse, ListWorkflowsResponse,
    UnexpectedResponse, UpdateRevisionAliasResponse, UpdateWorkflowResponse,
};
pub use types::*;
