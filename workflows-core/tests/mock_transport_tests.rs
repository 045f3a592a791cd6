//! `ApiClient` tests over the in-memory mock transport.

use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use workflows_core::TransportError;
use workflows_core::testing::MockHttp;
use workflows_core::transport::{Credentials, HttpError, Method};
use workflows_core::v1::*;

const ROOT: &str = "https://workflows.example.test/api/workflow/1.0/";

fn client(mock: &MockHttp) -> ApiClient {
    ApiClient::new(ROOT, VoidSecuritySource, Arc::new(mock.clone())).unwrap()
}

#[tokio::test]
async fn test_create_execution_sends_camel_case() {
    let mock = MockHttp::new()
        .on_post(r"/workflows/wf-1/executions$")
        .respond_json(
            201,
            json!({"execution": {
                "executionId": "ex-1",
                "workflow": {"id": "wf-1", "name": "w1"},
                "status": "queued",
                "createdAt": "2025-01-01T00:00:00Z",
                "updatedAt": "2025-01-01T00:00:00Z"
            }}),
        );

    let response = client(&mock)
        .create_execution(
            CreateExecutionRequest {
                revision_id: Some(3),
                revision_alias: None,
                name: Some("nightly".to_string()),
                args: None,
            },
            WorkflowParams {
                id: "wf-1".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(matches!(response, CreateExecutionResponse::Created(_)));

    let requests = mock.requests();
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.url,
        "https://workflows.example.test/api/workflow/1.0/workflows/wf-1/executions"
    );
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_str(&request.body_string()).unwrap();
    assert_eq!(body, json!({"name": "nightly", "revisionId": 3}));
}

#[tokio::test]
async fn test_bodyless_requests_have_no_content_type() {
    let mock = MockHttp::new()
        .on_delete(r"/subscription$")
        .respond(workflows_core::transport::HttpResponse::new(204, Vec::new()));

    let response = client(&mock).delete_subscription().await.unwrap();
    assert_eq!(response, DeleteSubscriptionResponse::NoContent);

    let requests = mock.requests();
    let request = &requests[0];
    assert!(request.body.is_none());
    assert!(!request.headers.contains_key("content-type"));
    assert_eq!(
        request.headers.get("accept").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_failure_body_fallback_to_raw_text() {
    let mock = MockHttp::new()
        .on_get(r"/workflows/wf-1$")
        .respond_text(500, "upstream exploded");

    let response = client(&mock)
        .get_workflow(WorkflowParams {
            id: "wf-1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        response,
        GetWorkflowResponse::InternalServerError(ErrorBody {
            message: "upstream exploded".to_string()
        })
    );
}

#[tokio::test]
async fn test_transport_failure_is_err() {
    let mock = MockHttp::new().on_any(r".*").fail_with(HttpError::Timeout);

    let result = client(&mock).list_plans().await;
    assert!(matches!(result, Err(TransportError::Http(HttpError::Timeout))));
}

#[tokio::test]
async fn test_unmatched_request_is_err() {
    let mock = MockHttp::new();

    let result = client(&mock).get_subscription().await;
    assert!(matches!(
        result,
        Err(TransportError::Http(HttpError::NoMockMatch { .. }))
    ));
}

/// Records which operations asked for credentials.
#[derive(Clone, Default)]
struct RecordingSecurity {
    seen: Arc<Mutex<Vec<OperationName>>>,
}

impl SecuritySource for RecordingSecurity {
    fn api_key_auth(
        &self,
        operation: OperationName,
    ) -> Result<Option<Credentials>, TransportError> {
        self.seen.lock().push(operation);
        if operation == OperationName::DeleteWorkflow {
            return Err(TransportError::Auth("delete not allowed".to_string()));
        }
        Ok(Some(Credentials::new("token", "secret")))
    }
}

#[tokio::test]
async fn test_security_source_per_operation() {
    let security = RecordingSecurity::default();
    let mock = MockHttp::new()
        .on_get(r"/plans$")
        .respond_json(200, json!({"plans": []}));
    let client = ApiClient::new(ROOT, security.clone(), Arc::new(mock.clone())).unwrap();

    client.list_plans().await.unwrap();
    let result = client
        .delete_workflow(WorkflowParams {
            id: "wf-1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(TransportError::Auth(_))));
    assert_eq!(
        *security.seen.lock(),
        vec![OperationName::ListPlans, OperationName::DeleteWorkflow]
    );
    // The refused call never reached the transport.
    assert_eq!(mock.request_count(), 1);
    assert_eq!(
        mock.requests()[0].credentials,
        Some(Credentials::new("token", "secret"))
    );
}
