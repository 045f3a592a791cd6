//! Workflow execution operations.

use crate::ClientFuture;
use crate::error::{api_failure, transport_failure, unexpected_response, unrecognized_response};
use std::sync::Arc;
use workflows_core::v1::{
    CancelExecutionResponse, CreateExecutionRequest, CreateExecutionResponse,
    DeleteExecutionResponse, Execution, ExecutionHistory, ExecutionList, ExecutionParams,
    GetExecutionResponse, ListExecutionHistoryResponse, ListExecutionsParams,
    ListExecutionsResponse, Operations, WorkflowParams,
};

const CREATE: &str = "Execution.Create";
const LIST: &str = "Execution.List";
const READ: &str = "Execution.Read";
const CANCEL: &str = "Execution.Cancel";
const DELETE: &str = "Execution.Delete";
const LIST_HISTORY: &str = "Execution.ListHistory";

/// Operations on the executions of a workflow.
pub trait ExecutionApi: Send + Sync {
    /// Start an execution of workflow `id`.
    fn create<'a>(
        &'a self,
        id: &'a str,
        request: CreateExecutionRequest,
    ) -> ClientFuture<'a, Execution>;

    /// List the executions of a workflow.
    fn list(&self, params: ListExecutionsParams) -> ClientFuture<'_, ExecutionList>;

    /// Get one execution.
    fn read<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, Execution>;

    /// Request cancellation of a running execution.
    ///
    /// The returned execution usually still reports
    /// [`Cancelling`](workflows_core::v1::ExecutionStatus::Cancelling).
    fn cancel<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, Execution>;

    /// Delete a finished execution.
    fn delete<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, ()>;

    /// Get the step history of an execution.
    fn list_history<'a>(
        &'a self,
        id: &'a str,
        execution_id: &'a str,
    ) -> ClientFuture<'a, ExecutionHistory>;
}

/// [`ExecutionApi`] over an [`Operations`] client.
#[derive(Debug)]
pub struct ExecutionOp<C: Operations + ?Sized> {
    client: Arc<C>,
}

impl<C: Operations + ?Sized> ExecutionOp<C> {
    /// Create the operation group. Performs no I/O.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: Operations + ?Sized> Clone for ExecutionOp<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

fn execution_params(id: &str, execution_id: &str) -> ExecutionParams {
    ExecutionParams {
        id: id.to_string(),
        execution_id: execution_id.to_string(),
    }
}

impl<C: Operations + ?Sized> ExecutionApi for ExecutionOp<C> {
    fn create<'a>(
        &'a self,
        id: &'a str,
        request: CreateExecutionRequest,
    ) -> ClientFuture<'a, Execution> {
        Box::pin(async move {
            let params = WorkflowParams { id: id.to_string() };
            match self.client.create_execution(request, params).await {
                Ok(CreateExecutionResponse::Created(body)) => Ok(body.execution),
                Ok(CreateExecutionResponse::BadRequest(e)) => Err(api_failure(CREATE, 400, e)),
                Ok(CreateExecutionResponse::Unauthorized(e)) => Err(api_failure(CREATE, 401, e)),
                Ok(CreateExecutionResponse::Forbidden(e)) => Err(api_failure(CREATE, 403, e)),
                Ok(CreateExecutionResponse::NotFound(e)) => Err(api_failure(CREATE, 404, e)),
                Ok(CreateExecutionResponse::InternalServerError(e)) => {
                    Err(api_failure(CREATE, 500, e))
                }
                Ok(CreateExecutionResponse::Unexpected(r)) => Err(unexpected_response(CREATE, r)),
                Ok(_) => Err(unrecognized_response(CREATE)),
                Err(err) => Err(transport_failure(CREATE, err)),
            }
        })
    }

    fn list(&self, params: ListExecutionsParams) -> ClientFuture<'_, ExecutionList> {
        Box::pin(async move {
            match self.client.list_executions(params).await {
                Ok(ListExecutionsResponse::Ok(list)) => Ok(list),
                Ok(ListExecutionsResponse::BadRequest(e)) => Err(api_failure(LIST, 400, e)),
                Ok(ListExecutionsResponse::Unauthorized(e)) => Err(api_failure(LIST, 401, e)),
                Ok(ListExecutionsResponse::Forbidden(e)) => Err(api_failure(LIST, 403, e)),
                Ok(ListExecutionsResponse::NotFound(e)) => Err(api_failure(LIST, 404, e)),
                Ok(ListExecutionsResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST, 500, e))
                }
                Ok(ListExecutionsResponse::Unexpected(r)) => Err(unexpected_response(LIST, r)),
                Ok(_) => Err(unrecognized_response(LIST)),
                Err(err) => Err(transport_failure(LIST, err)),
            }
        })
    }

    fn read<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, Execution> {
        Box::pin(async move {
            let params = execution_params(id, execution_id);
            match self.client.get_execution(params).await {
                Ok(GetExecutionResponse::Ok(body)) => Ok(body.execution),
                Ok(GetExecutionResponse::BadRequest(e)) => Err(api_failure(READ, 400, e)),
                Ok(GetExecutionResponse::Unauthorized(e)) => Err(api_failure(READ, 401, e)),
                Ok(GetExecutionResponse::Forbidden(e)) => Err(api_failure(READ, 403, e)),
                Ok(GetExecutionResponse::NotFound(e)) => Err(api_failure(READ, 404, e)),
                Ok(GetExecutionResponse::InternalServerError(e)) => {
                    Err(api_failure(READ, 500, e))
                }
                Ok(GetExecutionResponse::Unexpected(r)) => Err(unexpected_response(READ, r)),
                Ok(_) => Err(unrecognized_response(READ)),
                Err(err) => Err(transport_failure(READ, err)),
            }
        })
    }

    fn cancel<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, Execution> {
        Box::pin(async move {
            let params = execution_params(id, execution_id);
            match self.client.cancel_execution(params).await {
                Ok(CancelExecutionResponse::Accepted(body)) => Ok(body.execution),
                Ok(CancelExecutionResponse::BadRequest(e)) => Err(api_failure(CANCEL, 400, e)),
                Ok(CancelExecutionResponse::Unauthorized(e)) => Err(api_failure(CANCEL, 401, e)),
                Ok(CancelExecutionResponse::Forbidden(e)) => Err(api_failure(CANCEL, 403, e)),
                Ok(CancelExecutionResponse::NotFound(e)) => Err(api_failure(CANCEL, 404, e)),
                Ok(CancelExecutionResponse::InternalServerError(e)) => {
                    Err(api_failure(CANCEL, 500, e))
                }
                Ok(CancelExecutionResponse::Unexpected(r)) => Err(unexpected_response(CANCEL, r)),
                Ok(_) => Err(unrecognized_response(CANCEL)),
                Err(err) => Err(transport_failure(CANCEL, err)),
            }
        })
    }

    fn delete<'a>(&'a self, id: &'a str, execution_id: &'a str) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            let params = execution_params(id, execution_id);
            match self.client.delete_execution(params).await {
                Ok(DeleteExecutionResponse::Ok) => Ok(()),
                Ok(DeleteExecutionResponse::BadRequest(e)) => Err(api_failure(DELETE, 400, e)),
                Ok(DeleteExecutionResponse::Unauthorized(e)) => Err(api_failure(DELETE, 401, e)),
                Ok(DeleteExecutionResponse::Forbidden(e)) => Err(api_failure(DELETE, 403, e)),
                Ok(DeleteExecutionResponse::NotFound(e)) => Err(api_failure(DELETE, 404, e)),
                Ok(DeleteExecutionResponse::InternalServerError(e)) => {
                    Err(api_failure(DELETE, 500, e))
                }
                Ok(DeleteExecutionResponse::Unexpected(r)) => Err(unexpected_response(DELETE, r)),
                Ok(_) => Err(unrecognized_response(DELETE)),
                Err(err) => Err(transport_failure(DELETE, err)),
            }
        })
    }

    fn list_history<'a>(
        &'a self,
        id: &'a str,
        execution_id: &'a str,
    ) -> ClientFuture<'a, ExecutionHistory> {
        Box::pin(async move {
            let params = execution_params(id, execution_id);
            match self.client.list_execution_history(params).await {
                Ok(ListExecutionHistoryResponse::Ok(history)) => Ok(history),
                Ok(ListExecutionHistoryResponse::BadRequest(e)) => {
                    Err(api_failure(LIST_HISTORY, 400, e))
                }
                Ok(ListExecutionHistoryResponse::Unauthorized(e)) => {
                    Err(api_failure(LIST_HISTORY, 401, e))
                }
                Ok(ListExecutionHistoryResponse::Forbidden(e)) => {
                    Err(api_failure(LIST_HISTORY, 403, e))
                }
                Ok(ListExecutionHistoryResponse::NotFound(e)) => {
                    Err(api_failure(LIST_HISTORY, 404, e))
                }
                Ok(ListExecutionHistoryResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST_HISTORY, 500, e))
                }
                Ok(ListExecutionHistoryResponse::Unexpected(r)) => {
                    Err(unexpected_response(LIST_HISTORY, r))
                }
                Ok(_) => Err(unrecognized_response(LIST_HISTORY)),
                Err(err) => Err(transport_failure(LIST_HISTORY, err)),
            }
        })
    }
}
