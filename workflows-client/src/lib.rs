//! Typed client for the workflows API.
//!
//! Every operation of the API answers with one of several response shapes
//! (success, or one failure per HTTP status class). This crate collapses them
//! into a plain `Result<T, Error>`:
//!
//! - success returns the payload,
//! - a declared failure returns an [`Error`] carrying the HTTP status and the
//!   server message,
//! - a transport failure or an undeclared response returns an [`Error`] with
//!   status `0`.
//!
//! Every error names the failing operation (e.g. `Execution.Cancel`).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use workflows_client::transport::HttpClient;
//! use workflows_client::v1::CreateWorkflowRequest;
//! use workflows_client::{WorkflowApi, WorkflowOp, is_not_found_error, new_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Credentials come from SAKURA_ACCESS_TOKEN / SAKURA_ACCESS_TOKEN_SECRET
//! let client = Arc::new(new_client(Arc::new(HttpClient::from_env()?))?);
//! let workflows = WorkflowOp::new(client);
//!
//! let workflow = workflows
//!     .create(CreateWorkflowRequest {
//!         name: "w1".to_string(),
//!         description: None,
//!         runbook: std::fs::read_to_string("runbook.yaml")?,
//!         publish: false,
//!         logging: true,
//!     })
//!     .await?;
//!
//! match workflows.delete(&workflow.id).await {
//!     Ok(()) => println!("deleted {}", workflow.id),
//!     Err(e) if is_not_found_error(&e) => println!("already gone"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod execution;
mod revision;
mod subscription;
mod workflow;

use std::future::Future;
use std::pin::Pin;

pub use client::{DEFAULT_API_ROOT_URL, USER_AGENT, new_client, new_client_with_root_url};
pub use error::{Error, MessageError, Result, UnexpectedStatusError};
pub use execution::{ExecutionApi, ExecutionOp};
pub use revision::{RevisionApi, RevisionOp};
pub use subscription::{SubscriptionApi, SubscriptionOp};
pub use workflow::{WorkflowApi, WorkflowOp};

pub use workflows_core::{
    StatusError, is_bad_request_error, is_forbidden_error, is_internal_server_error,
    is_not_found_error, is_unauthorized_error, status_code_of,
};
pub use workflows_core::{transport, v1};

/// Future returned by every operation-group method.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;
