//! Workflow operations.

use crate::ClientFuture;
use crate::error::{api_failure, transport_failure, unexpected_response, unrecognized_response};
use std::sync::Arc;
use workflows_core::v1::{
    CreateWorkflowRequest, CreateWorkflowResponse, DeleteWorkflowResponse, GetWorkflowResponse,
    ListWorkflowSuggestParams, ListWorkflowSuggestResponse, ListWorkflowsParams,
    ListWorkflowsResponse, Operations, UpdateWorkflowRequest, UpdateWorkflowResponse, Workflow,
    WorkflowList, WorkflowParams, WorkflowSuggestList,
};

const CREATE: &str = "Workflow.Create";
const LIST: &str = "Workflow.List";
const LIST_SUGGEST: &str = "Workflow.ListSuggest";
const READ: &str = "Workflow.Read";
const UPDATE: &str = "Workflow.Update";
const DELETE: &str = "Workflow.Delete";

/// Operations on workflows.
pub trait WorkflowApi: Send + Sync {
    /// Create a workflow.
    fn create(&self, request: CreateWorkflowRequest) -> ClientFuture<'_, Workflow>;

    /// List workflows.
    fn list(&self, params: ListWorkflowsParams) -> ClientFuture<'_, WorkflowList>;

    /// Complete a workflow name.
    fn list_suggest(&self, params: ListWorkflowSuggestParams)
    -> ClientFuture<'_, WorkflowSuggestList>;

    /// Get a workflow by id.
    fn read<'a>(&'a self, id: &'a str) -> ClientFuture<'a, Workflow>;

    /// Update a workflow. Unset fields of `request` are left unchanged.
    fn update<'a>(&'a self, id: &'a str, request: UpdateWorkflowRequest)
    -> ClientFuture<'a, Workflow>;

    /// Delete a workflow.
    fn delete<'a>(&'a self, id: &'a str) -> ClientFuture<'a, ()>;
}

/// [`WorkflowApi`] over an [`Operations`] client.
#[derive(Debug)]
pub struct WorkflowOp<C: Operations + ?Sized> {
    client: Arc<C>,
}

impl<C: Operations + ?Sized> WorkflowOp<C> {
    /// Create the operation group. Performs no I/O.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: Operations + ?Sized> Clone for WorkflowOp<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: Operations + ?Sized> WorkflowApi for WorkflowOp<C> {
    fn create(&self, request: CreateWorkflowRequest) -> ClientFuture<'_, Workflow> {
        Box::pin(async move {
            match self.client.create_workflow(request).await {
                Ok(CreateWorkflowResponse::Created(body)) => Ok(body.workflow),
                Ok(CreateWorkflowResponse::BadRequest(e)) => Err(api_failure(CREATE, 400, e)),
                Ok(CreateWorkflowResponse::Unauthorized(e)) => Err(api_failure(CREATE, 401, e)),
                Ok(CreateWorkflowResponse::Forbidden(e)) => Err(api_failure(CREATE, 403, e)),
                Ok(CreateWorkflowResponse::NotFound(e)) => Err(api_failure(CREATE, 404, e)),
                Ok(CreateWorkflowResponse::InternalServerError(e)) => {
                    Err(api_failure(CREATE, 500, e))
                }
                Ok(CreateWorkflowResponse::Unexpected(r)) => Err(unexpected_response(CREATE, r)),
                Ok(_) => Err(unrecognized_response(CREATE)),
                Err(err) => Err(transport_failure(CREATE, err)),
            }
        })
    }

    fn list(&self, params: ListWorkflowsParams) -> ClientFuture<'_, WorkflowList> {
        Box::pin(async move {
            match self.client.list_workflows(params).await {
                Ok(ListWorkflowsResponse::Ok(list)) => Ok(list),
                Ok(ListWorkflowsResponse::BadRequest(e)) => Err(api_failure(LIST, 400, e)),
                Ok(ListWorkflowsResponse::Unauthorized(e)) => Err(api_failure(LIST, 401, e)),
                Ok(ListWorkflowsResponse::Forbidden(e)) => Err(api_failure(LIST, 403, e)),
                Ok(ListWorkflowsResponse::NotFound(e)) => Err(api_failure(LIST, 404, e)),
                Ok(ListWorkflowsResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST, 500, e))
                }
                Ok(ListWorkflowsResponse::Unexpected(r)) => Err(unexpected_response(LIST, r)),
                Ok(_) => Err(unrecognized_response(LIST)),
                Err(err) => Err(transport_failure(LIST, err)),
            }
        })
    }

    fn list_suggest(
        &self,
        params: ListWorkflowSuggestParams,
    ) -> ClientFuture<'_, WorkflowSuggestList> {
        Box::pin(async move {
            match self.client.list_workflow_suggest(params).await {
                Ok(ListWorkflowSuggestResponse::Ok(list)) => Ok(list),
                Ok(ListWorkflowSuggestResponse::BadRequest(e)) => {
                    Err(api_failure(LIST_SUGGEST, 400, e))
                }
                Ok(ListWorkflowSuggestResponse::Unauthorized(e)) => {
                    Err(api_failure(LIST_SUGGEST, 401, e))
                }
                Ok(ListWorkflowSuggestResponse::Forbidden(e)) => {
                    Err(api_failure(LIST_SUGGEST, 403, e))
                }
                Ok(ListWorkflowSuggestResponse::NotFound(e)) => {
                    Err(api_failure(LIST_SUGGEST, 404, e))
                }
                Ok(ListWorkflowSuggestResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST_SUGGEST, 500, e))
                }
                Ok(ListWorkflowSuggestResponse::Unexpected(r)) => {
                    Err(unexpected_response(LIST_SUGGEST, r))
                }
                Ok(_) => Err(unrecognized_response(LIST_SUGGEST)),
                Err(err) => Err(transport_failure(LIST_SUGGEST, err)),
            }
        })
    }

    fn read<'a>(&'a self, id: &'a str) -> ClientFuture<'a, Workflow> {
        Box::pin(async move {
            let params = WorkflowParams { id: id.to_string() };
            match self.client.get_workflow(params).await {
                Ok(GetWorkflowResponse::Ok(body)) => Ok(body.workflow),
                Ok(GetWorkflowResponse::BadRequest(e)) => Err(api_failure(READ, 400, e)),
                Ok(GetWorkflowResponse::Unauthorized(e)) => Err(api_failure(READ, 401, e)),
                Ok(GetWorkflowResponse::Forbidden(e)) => Err(api_failure(READ, 403, e)),
                Ok(GetWorkflowResponse::NotFound(e)) => Err(api_failure(READ, 404, e)),
                Ok(GetWorkflowResponse::InternalServerError(e)) => Err(api_failure(READ, 500, e)),
                Ok(GetWorkflowResponse::Unexpected(r)) => Err(unexpected_response(READ, r)),
                Ok(_) => Err(unrecognized_response(READ)),
                Err(err) => Err(transport_failure(READ, err)),
            }
        })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        request: UpdateWorkflowRequest,
    ) -> ClientFuture<'a, Workflow> {
        Box::pin(async move {
            let params = WorkflowParams { id: id.to_string() };
            match self.client.update_workflow(request, params).await {
                Ok(UpdateWorkflowResponse::Ok(body)) => Ok(body.workflow),
                Ok(UpdateWorkflowResponse::BadRequest(e)) => Err(api_failure(UPDATE, 400, e)),
                Ok(UpdateWorkflowResponse::Unauthorized(e)) => Err(api_failure(UPDATE, 401, e)),
                Ok(UpdateWorkflowResponse::Forbidden(e)) => Err(api_failure(UPDATE, 403, e)),
                Ok(UpdateWorkflowResponse::NotFound(e)) => Err(api_failure(UPDATE, 404, e)),
                Ok(UpdateWorkflowResponse::InternalServerError(e)) => {
                    Err(api_failure(UPDATE, 500, e))
                }
                Ok(UpdateWorkflowResponse::Unexpected(r)) => Err(unexpected_response(UPDATE, r)),
                Ok(_) => Err(unrecognized_response(UPDATE)),
                Err(err) => Err(transport_failure(UPDATE, err)),
            }
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            let params = WorkflowParams { id: id.to_string() };
            match self.client.delete_workflow(params).await {
                Ok(DeleteWorkflowResponse::Ok) => Ok(()),
                Ok(DeleteWorkflowResponse::BadRequest(e)) => Err(api_failure(DELETE, 400, e)),
                Ok(DeleteWorkflowResponse::Unauthorized(e)) => Err(api_failure(DELETE, 401, e)),
                Ok(DeleteWorkflowResponse::Forbidden(e)) => Err(api_failure(DELETE, 403, e)),
                Ok(DeleteWorkflowResponse::NotFound(e)) => Err(api_failure(DELETE, 404, e)),
                Ok(DeleteWorkflowResponse::InternalServerError(e)) => {
                    Err(api_failure(DELETE, 500, e))
                }
                Ok(DeleteWorkflowResponse::Unexpected(r)) => Err(unexpected_response(DELETE, r)),
                Ok(_) => Err(unrecognized_response(DELETE)),
                Err(err) => Err(transport_failure(DELETE, err)),
            }
        })
    }
}
