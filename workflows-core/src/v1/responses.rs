//! One closed response type per remote operation.
//!
//! Each enum has the operation's success variant, one variant per declared
//! failure status, and [`Unexpected`](CreateWorkflowResponse::Unexpected) for
//! anything else the server sends. The enums are `#[non_exhaustive]`: the
//! API may declare more statuses later, so consumers must keep a wildcard arm.

use super::types::{
    ErrorBody, ExecutionEnvelope, ExecutionHistory, ExecutionList, PlanList, RevisionEnvelope,
    RevisionList, Subscription, WorkflowEnvelope, WorkflowList, WorkflowSuggestList,
};
use crate::error::TransportError;
use crate::transport::HttpResponse;
use serde::de::DeserializeOwned;

/// A response with a status the operation does not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body text.
    pub body: String,
}

impl From<HttpResponse> for UnexpectedResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            body: response.body_string(),
            status: response.status,
        }
    }
}

/// Conversion from a raw HTTP response into an operation's response type.
pub(crate) trait DecodeResponse: Sized {
    fn decode(response: HttpResponse) -> Result<Self, TransportError>;
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, TransportError> {
    serde_json::from_slice(body).map_err(TransportError::Decode)
}

macro_rules! operation_response {
    (
        $(#[$meta:meta])*
        $name:ident { $success:ident($payload:ty) = $status:literal }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            #[doc = concat!("HTTP ", stringify!($status), ".")]
            $success($payload),
            /// HTTP 400.
            BadRequest(ErrorBody),
            /// HTTP 401.
            Unauthorized(ErrorBody),
            /// HTTP 403.
            Forbidden(ErrorBody),
            /// HTTP 404.
            NotFound(ErrorBody),
            /// HTTP 500.
            InternalServerError(ErrorBody),
            /// Any other status.
            Unexpected(UnexpectedResponse),
        }

        impl DecodeResponse for $name {
            fn decode(response: HttpResponse) -> Result<Self, TransportError> {
                Ok(match response.status {
                    $status => Self::$success(decode_json(&response.body)?),
                    400 => Self::BadRequest(ErrorBody::from_body(&response.body)),
                    401 => Self::Unauthorized(ErrorBody::from_body(&response.body)),
                    403 => Self::Forbidden(ErrorBody::from_body(&response.body)),
                    404 => Self::NotFound(ErrorBody::from_body(&response.body)),
                    500 => Self::InternalServerError(ErrorBody::from_body(&response.body)),
                    _ => Self::Unexpected(response.into()),
                })
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident { $success:ident = $status:literal }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            #[doc = concat!("HTTP ", stringify!($status), ", no payload.")]
            $success,
            /// HTTP 400.
            BadRequest(ErrorBody),
            /// HTTP 401.
            Unauthorized(ErrorBody),
            /// HTTP 403.
            Forbidden(ErrorBody),
            /// HTTP 404.
            NotFound(ErrorBody),
            /// HTTP 500.
            InternalServerError(ErrorBody),
            /// Any other status.
            Unexpected(UnexpectedResponse),
        }

        impl DecodeResponse for $name {
            fn decode(response: HttpResponse) -> Result<Self, TransportError> {
                Ok(match response.status {
                    $status => Self::$success,
                    400 => Self::BadRequest(ErrorBody::from_body(&response.body)),
                    401 => Self::Unauthorized(ErrorBody::from_body(&response.body)),
                    403 => Self::Forbidden(ErrorBody::from_body(&response.body)),
                    404 => Self::NotFound(ErrorBody::from_body(&response.body)),
                    500 => Self::InternalServerError(ErrorBody::from_body(&response.body)),
                    _ => Self::Unexpected(response.into()),
                })
            }
        }
    };
}

operation_response! {
    /// Response of `create_workflow`.
    CreateWorkflowResponse { Created(WorkflowEnvelope) = 201 }
}
operation_response! {
    /// Response of `list_workflows`.
    ListWorkflowsResponse { Ok(WorkflowList) = 200 }
}
operation_response! {
    /// Response of `list_workflow_suggest`.
    ListWorkflowSuggestResponse { Ok(WorkflowSuggestList) = 200 }
}
operation_response! {
    /// Response of `get_workflow`.
    GetWorkflowResponse { Ok(WorkflowEnvelope) = 200 }
}
operation_response! {
    /// Response of `update_workflow`.
    UpdateWorkflowResponse { Ok(WorkflowEnvelope) = 200 }
}
operation_response! {
    /// Response of `delete_workflow`.
    DeleteWorkflowResponse { Ok = 200 }
}

operation_response! {
    /// Response of `create_workflow_revision`.
    CreateRevisionResponse { Created(RevisionEnvelope) = 201 }
}
operation_response! {
    /// Response of `list_workflow_revisions`.
    ListRevisionsResponse { Ok(RevisionList) = 200 }
}
operation_response! {
    /// Response of `get_workflow_revision`.
    GetRevisionResponse { Ok(RevisionEnvelope) = 200 }
}
operation_response! {
    /// Response of `update_workflow_revision_alias`.
    UpdateRevisionAliasResponse { Ok(RevisionEnvelope) = 200 }
}
operation_response! {
    /// Response of `delete_workflow_revision_alias`.
    DeleteRevisionAliasResponse { Ok = 200 }
}

operation_response! {
    /// Response of `create_execution`.
    CreateExecutionResponse { Created(ExecutionEnvelope) = 201 }
}
operation_response! {
    /// Response of `list_executions`.
    ListExecutionsResponse { Ok(ExecutionList) = 200 }
}
operation_response! {
    /// Response of `get_execution`.
    GetExecutionResponse { Ok(ExecutionEnvelope) = 200 }
}
operation_response! {
    /// Response of `cancel_execution`.
    CancelExecutionResponse { Accepted(ExecutionEnvelope) = 202 }
}
operation_response! {
    /// Response of `delete_execution`.
    DeleteExecutionResponse { Ok = 200 }
}
operation_response! {
    /// Response of `list_execution_history`.
    ListExecutionHistoryResponse { Ok(ExecutionHistory) = 200 }
}

operation_response! {
    /// Response of `list_plans`.
    ListPlansResponse { Ok(PlanList) = 200 }
}
operation_response! {
    /// Response of `get_subscription`.
    GetSubscriptionResponse { Ok(Subscription) = 200 }
}
operation_response! {
    /// Response of `create_subscription`.
    CreateSubscriptionResponse { NoContent = 204 }
}
operation_response! {
    /// Response of `delete_subscription`.
    DeleteSubscriptionResponse { NoContent = 204 }
}
