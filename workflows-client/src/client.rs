//! Client construction and process-wide configuration.

use crate::error::{Error, Result};
use std::sync::{Arc, LazyLock};
use workflows_core::transport::{ClientOption, HttpTransport};
use workflows_core::v1::{ApiClient, VoidSecuritySource};

/// Root URL of the production API.
pub const DEFAULT_API_ROOT_URL: &str =
    "https://secure.sakura.ad.jp/cloud/zone/tk1b/api/workflow/1.0/";

/// `User-Agent` sent by clients built with [`new_client`].
pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "workflows-api-rs/{} ({}/{})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

/// Build an API client for [`DEFAULT_API_ROOT_URL`].
///
/// See [`new_client_with_root_url`].
///
/// # Errors
///
/// Returns an error if the transport cannot be configured.
pub fn new_client(transport: Arc<dyn HttpTransport>) -> Result<ApiClient> {
    new_client_with_root_url(transport, DEFAULT_API_ROOT_URL)
}

/// Build an API client for `root_url`.
///
/// The transport is duplicated with [`USER_AGENT`] and forced automatic
/// authentication applied; `transport` itself is not modified.
///
/// # Errors
///
/// Returns an error if `transport` has no option-duplication capability.
/// Errors from the duplication itself, or from an invalid root URL, are passed
/// through unchanged; [`Error::get_ref`] returns them.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use workflows_client::{WorkflowApi, WorkflowOp, new_client};
/// use workflows_client::transport::HttpClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = new_client(Arc::new(HttpClient::from_env()?))?;
/// let workflows = WorkflowOp::new(Arc::new(client));
///
/// let workflow = workflows.read("wf-1").await?;
/// println!("{}", workflow.name);
/// # Ok(())
/// # }
/// ```
pub fn new_client_with_root_url(
    transport: Arc<dyn HttpTransport>,
    root_url: &str,
) -> Result<ApiClient> {
    let Some(options) = transport.option_api() else {
        return Err(Error::new(
            "client does not support option duplication",
            None,
        ));
    };

    let augmented = options
        .dup_with(&[
            ClientOption::UserAgent(USER_AGENT.clone()),
            ClientOption::ForceAutomaticAuthentication,
        ])
        .map_err(|err| Error::transparent(Box::new(err)))?;

    let client = ApiClient::new(root_url, VoidSecuritySource, augmented)
        .map_err(|err| Error::transparent(Box::new(err)))?;

    tracing::debug!(root_url, user_agent = %*USER_AGENT, "workflows client created");

    Ok(client)
}
