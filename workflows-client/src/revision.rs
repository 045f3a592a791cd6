//! Workflow revision operations.

use crate::ClientFuture;
use crate::error::{api_failure, transport_failure, unexpected_response, unrecognized_response};
use std::sync::Arc;
use workflows_core::v1::{
    CreateRevisionRequest, CreateRevisionResponse, DeleteRevisionAliasResponse,
    GetRevisionResponse, ListRevisionsParams, ListRevisionsResponse, Operations, Revision,
    RevisionList, RevisionParams, UpdateRevisionAliasRequest, UpdateRevisionAliasResponse,
    WorkflowParams,
};

const CREATE: &str = "Revision.Create";
const LIST: &str = "Revision.List";
const READ: &str = "Revision.Read";
const UPDATE_ALIAS: &str = "Revision.UpdateAlias";
const DELETE_ALIAS: &str = "Revision.DeleteAlias";

/// Operations on the revisions of a workflow.
///
/// Revisions are immutable; only their alias can change.
pub trait RevisionApi: Send + Sync {
    /// Create a revision of workflow `id`.
    fn create<'a>(&'a self, id: &'a str, request: CreateRevisionRequest)
    -> ClientFuture<'a, Revision>;

    /// List the revisions of a workflow.
    fn list(&self, params: ListRevisionsParams) -> ClientFuture<'_, RevisionList>;

    /// Get one revision.
    fn read<'a>(&'a self, id: &'a str, revision_id: i64) -> ClientFuture<'a, Revision>;

    /// Set the alias of a revision.
    fn update_alias<'a>(
        &'a self,
        id: &'a str,
        revision_id: i64,
        request: UpdateRevisionAliasRequest,
    ) -> ClientFuture<'a, Revision>;

    /// Remove the alias of a revision.
    fn delete_alias<'a>(&'a self, id: &'a str, revision_id: i64) -> ClientFuture<'a, ()>;
}

/// [`RevisionApi`] over an [`Operations`] client.
#[derive(Debug)]
pub struct RevisionOp<C: Operations + ?Sized> {
    client: Arc<C>,
}

impl<C: Operations + ?Sized> RevisionOp<C> {
    /// Create the operation group. Performs no I/O.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: Operations + ?Sized> Clone for RevisionOp<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

fn revision_params(id: &str, revision_id: i64) -> RevisionParams {
    RevisionParams {
        id: id.to_string(),
        revision_id,
    }
}

impl<C: Operations + ?Sized> RevisionApi for RevisionOp<C> {
    fn create<'a>(
        &'a self,
        id: &'a str,
        request: CreateRevisionRequest,
    ) -> ClientFuture<'a, Revision> {
        Box::pin(async move {
            let params = WorkflowParams { id: id.to_string() };
            match self.client.create_workflow_revision(request, params).await {
                Ok(CreateRevisionResponse::Created(body)) => Ok(body.revision),
                Ok(CreateRevisionResponse::BadRequest(e)) => Err(api_failure(CREATE, 400, e)),
                Ok(CreateRevisionResponse::Unauthorized(e)) => Err(api_failure(CREATE, 401, e)),
                Ok(CreateRevisionResponse::Forbidden(e)) => Err(api_failure(CREATE, 403, e)),
                Ok(CreateRevisionResponse::NotFound(e)) => Err(api_failure(CREATE, 404, e)),
                Ok(CreateRevisionResponse::InternalServerError(e)) => {
                    Err(api_failure(CREATE, 500, e))
                }
                Ok(CreateRevisionResponse::Unexpected(r)) => Err(unexpected_response(CREATE, r)),
                Ok(_) => Err(unrecognized_response(CREATE)),
                Err(err) => Err(transport_failure(CREATE, err)),
            }
        })
    }

    fn list(&self, params: ListRevisionsParams) -> ClientFuture<'_, RevisionList> {
        Box::pin(async move {
            match self.client.list_workflow_revisions(params).await {
                Ok(ListRevisionsResponse::Ok(list)) => Ok(list),
                Ok(ListRevisionsResponse::BadRequest(e)) => Err(api_failure(LIST, 400, e)),
                Ok(ListRevisionsResponse::Unauthorized(e)) => Err(api_failure(LIST, 401, e)),
                Ok(ListRevisionsResponse::Forbidden(e)) => Err(api_failure(LIST, 403, e)),
                Ok(ListRevisionsResponse::NotFound(e)) => Err(api_failure(LIST, 404, e)),
                Ok(ListRevisionsResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST, 500, e))
                }
                Ok(ListRevisionsResponse::Unexpected(r)) => Err(unexpected_response(LIST, r)),
                Ok(_) => Err(unrecognized_response(LIST)),
                Err(err) => Err(transport_failure(LIST, err)),
            }
        })
    }

    fn read<'a>(&'a self, id: &'a str, revision_id: i64) -> ClientFuture<'a, Revision> {
        Box::pin(async move {
            let params = revision_params(id, revision_id);
            match self.client.get_workflow_revision(params).await {
                Ok(GetRevisionResponse::Ok(body)) => Ok(body.revision),
                Ok(GetRevisionResponse::BadRequest(e)) => Err(api_failure(READ, 400, e)),
                Ok(GetRevisionResponse::Unauthorized(e)) => Err(api_failure(READ, 401, e)),
                Ok(GetRevisionResponse::Forbidden(e)) => Err(api_failure(READ, 403, e)),
                Ok(GetRevisionResponse::NotFound(e)) => Err(api_failure(READ, 404, e)),
                Ok(GetRevisionResponse::InternalServerError(e)) => Err(api_failure(READ, 500, e)),
                Ok(GetRevisionResponse::Unexpected(r)) => Err(unexpected_response(READ, r)),
                Ok(_) => Err(unrecognized_response(READ)),
                Err(err) => Err(transport_failure(READ, err)),
            }
        })
    }

    fn update_alias<'a>(
        &'a self,
        id: &'a str,
        revision_id: i64,
        request: UpdateRevisionAliasRequest,
    ) -> ClientFuture<'a, Revision> {
        Box::pin(async move {
            let params = revision_params(id, revision_id);
            match self
                .client
                .update_workflow_revision_alias(request, params)
                .await
            {
                Ok(UpdateRevisionAliasResponse::Ok(body)) => Ok(body.revision),
                Ok(UpdateRevisionAliasResponse::BadRequest(e)) => {
                    Err(api_failure(UPDATE_ALIAS, 400, e))
                }
                Ok(UpdateRevisionAliasResponse::Unauthorized(e)) => {
                    Err(api_failure(UPDATE_ALIAS, 401, e))
                }
                Ok(UpdateRevisionAliasResponse::Forbidden(e)) => {
                    Err(api_failure(UPDATE_ALIAS, 403, e))
                }
                Ok(UpdateRevisionAliasResponse::NotFound(e)) => {
                    Err(api_failure(UPDATE_ALIAS, 404, e))
                }
                Ok(UpdateRevisionAliasResponse::InternalServerError(e)) => {
                    Err(api_failure(UPDATE_ALIAS, 500, e))
                }
                Ok(UpdateRevisionAliasResponse::Unexpected(r)) => {
                    Err(unexpected_response(UPDATE_ALIAS, r))
                }
                Ok(_) => Err(unrecognized_response(UPDATE_ALIAS)),
                Err(err) => Err(transport_failure(UPDATE_ALIAS, err)),
            }
        })
    }

    fn delete_alias<'a>(&'a self, id: &'a str, revision_id: i64) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            let params = revision_params(id, revision_id);
            match self.client.delete_workflow_revision_alias(params).await {
                Ok(DeleteRevisionAliasResponse::Ok) => Ok(()),
                Ok(DeleteRevisionAliasResponse::BadRequest(e)) => {
                    Err(api_failure(DELETE_ALIAS, 400, e))
                }
                Ok(DeleteRevisionAliasResponse::Unauthorized(e)) => {
                    Err(api_failure(DELETE_ALIAS, 401, e))
                }
                Ok(DeleteRevisionAliasResponse::Forbidden(e)) => {
                    Err(api_failure(DELETE_ALIAS, 403, e))
                }
                Ok(DeleteRevisionAliasResponse::NotFound(e)) => {
                    Err(api_failure(DELETE_ALIAS, 404, e))
                }
                Ok(DeleteRevisionAliasResponse::InternalServerError(e)) => {
                    Err(api_failure(DELETE_ALIAS, 500, e))
                }
                Ok(DeleteRevisionAliasResponse::Unexpected(r)) => {
                    Err(unexpected_response(DELETE_ALIAS, r))
                }
                Ok(_) => Err(unrecognized_response(DELETE_ALIAS)),
                Err(err) => Err(transport_failure(DELETE_ALIAS, err)),
            }
        })
    }
}
