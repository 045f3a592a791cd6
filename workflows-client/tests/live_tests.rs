//! Tests against the live API.
//!
//! Skipped unless `SAKURA_ACCESS_TOKEN` and `SAKURA_ACCESS_TOKEN_SECRET` are
//! set. They create and delete real resources.

use std::sync::Arc;
use workflows_client::transport::{Credentials, HttpClient};
use workflows_client::v1::{CreateExecutionRequest, CreateWorkflowRequest, ListWorkflowsParams};
use workflows_client::{
    ExecutionApi, ExecutionOp, SubscriptionApi, SubscriptionOp, WorkflowApi, WorkflowOp,
    is_not_found_error, new_client,
};

const RUNBOOK: &str = r#"
meta:
  description: live test
steps:
  done:
    return: ok
"#;

fn live_client() -> Option<Arc<workflows_client::v1::ApiClient>> {
    if Credentials::from_env().is_none() {
        eprintln!("skipping: SAKURA_ACCESS_TOKEN / SAKURA_ACCESS_TOKEN_SECRET not set");
        return None;
    }
    let transport = HttpClient::from_env().unwrap();
    Some(Arc::new(new_client(Arc::new(transport)).unwrap()))
}

#[tokio::test]
async fn live_list_plans() {
    let Some(client) = live_client() else {
        return;
    };

    let plans = SubscriptionOp::new(client).list_plans().await.unwrap();
    assert!(!plans.plans.is_empty());
}

#[tokio::test]
async fn live_workflow_lifecycle() {
    let Some(client) = live_client() else {
        return;
    };
    let workflows = WorkflowOp::new(Arc::clone(&client));
    let executions = ExecutionOp::new(client);

    let workflow = workflows
        .create(CreateWorkflowRequest {
            name: "workflows-client-live-test".to_string(),
            description: Some("created by the live test suite".to_string()),
            runbook: RUNBOOK.to_string(),
            publish: true,
            logging: false,
        })
        .await
        .unwrap();

    let read = workflows.read(&workflow.id).await.unwrap();
    assert_eq!(read.name, workflow.name);

    let listed = workflows
        .list(ListWorkflowsParams {
            name: Some(workflow.name.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(listed.workflows.iter().any(|w| w.id == workflow.id));

    let execution = executions
        .create(&workflow.id, CreateExecutionRequest::default())
        .await
        .unwrap();
    let history = executions
        .list_history(&workflow.id, &execution.execution_id)
        .await;
    assert!(history.is_ok(), "{history:?}");

    workflows.delete(&workflow.id).await.unwrap();

    let err = workflows.read(&workflow.id).await.unwrap_err();
    assert!(is_not_found_error(&err), "{err}");
}
