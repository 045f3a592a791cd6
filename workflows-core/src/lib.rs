//! Workflows Core Library
//!
//! Foundational types for the workflows API clients: the wire schema, the
//! per-operation response types, the [`Operations`](v1::Operations) contract
//! and the HTTP transport it runs over.
//!
//! # Key Components
//!
//! - **v1**: Schema types, response enums and [`ApiClient`](v1::ApiClient)
//! - **transport**: [`HttpTransport`](transport::HttpTransport) and the reqwest-backed
//!   [`HttpClient`](transport::HttpClient)
//! - **error**: Transport errors, [`StatusError`](error::StatusError) and the
//!   status predicates
//! - **testing**: [`MockHttp`](testing::MockHttp) for scripted responses
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use workflows_core::transport::HttpClient;
//! use workflows_core::v1::{ApiClient, GetWorkflowResponse, Operations, VoidSecuritySource, WorkflowParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpClient::from_env()?);
//! let client = ApiClient::new("https://example.com/api/workflow/1.0/", VoidSecuritySource, transport)?;
//!
//! let params = WorkflowParams { id: "wf-1".to_string() };
//! match client.get_workflow(params).await? {
//!     GetWorkflowResponse::Ok(body) => println!("{}", body.workflow.name),
//!     GetWorkflowResponse::NotFound(err) => println!("missing: {}", err.message),
//!     other => println!("failed: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod testing;
pub mod transport;
pub mod v1;

pub use error::{
    BoxError, Result, StatusError, TransportError, is_bad_request_error, is_forbidden_error,
    is_internal_server_error, is_not_found_error, is_unauthorized_error, status_code_of,
};
