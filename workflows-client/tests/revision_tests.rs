//! Tests for the revision operation group.

#[macro_use]
mod common;

use common::{StubOperations, revision, teapot};
use std::sync::Arc;
use workflows_client::v1::*;
use workflows_client::{RevisionApi, RevisionOp, is_forbidden_error};

fn create_request() -> CreateRevisionRequest {
    CreateRevisionRequest {
        runbook: "steps: {}".to_string(),
        revision_alias: Some("v1".to_string()),
    }
}

fn alias_request(alias: &str) -> UpdateRevisionAliasRequest {
    UpdateRevisionAliasRequest {
        revision_alias: alias.to_string(),
    }
}

#[tokio::test]
async fn test_create_returns_revision() {
    let stub = Arc::new(StubOperations::new().on(
        OperationName::CreateWorkflowRevision,
        CreateRevisionResponse::Created(RevisionEnvelope {
            revision: revision(2, Some("v1")),
        }),
    ));
    let revisions = RevisionOp::new(stub.clone());

    let created = revisions.create("wf-1", create_request()).await.unwrap();

    assert_eq!(created.revision_id, 2);
    assert_eq!(created.revision_alias.as_deref(), Some("v1"));
    assert!(stub.calls()[0].1.contains(r#"id: "wf-1""#));
}

#[tokio::test]
async fn test_list_returns_container() {
    let list = RevisionList {
        total: 2,
        revisions: vec![revision(2, Some("v1")), revision(1, None)],
    };
    let stub = Arc::new(StubOperations::new().on(
        OperationName::ListWorkflowRevisions,
        ListRevisionsResponse::Ok(list.clone()),
    ));
    let revisions = RevisionOp::new(stub);

    let params = ListRevisionsParams {
        id: "wf-1".to_string(),
        ..Default::default()
    };
    assert_eq!(revisions.list(params).await.unwrap(), list);
}

#[tokio::test]
async fn test_read_is_idempotent() {
    let stub = Arc::new(StubOperations::new().on(
        OperationName::GetWorkflowRevision,
        GetRevisionResponse::Ok(RevisionEnvelope {
            revision: revision(1, None),
        }),
    ));
    let revisions = RevisionOp::new(stub.clone());

    let first = revisions.read("wf-1", 1).await.unwrap();
    let second = revisions.read("wf-1", 1).await.unwrap();

    assert_eq!(first, second);
    assert!(stub.calls()[0].1.contains("revision_id: 1"));
}

#[tokio::test]
async fn test_update_alias_returns_revision() {
    let stub = Arc::new(StubOperations::new().on(
        OperationName::UpdateWorkflowRevisionAlias,
        UpdateRevisionAliasResponse::Ok(RevisionEnvelope {
            revision: revision(1, Some("stable")),
        }),
    ));
    let revisions = RevisionOp::new(stub);

    let updated = revisions
        .update_alias("wf-1", 1, alias_request("stable"))
        .await
        .unwrap();
    assert_eq!(updated.revision_alias.as_deref(), Some("stable"));
}

#[tokio::test]
async fn test_delete_alias_success() {
    let stub = Arc::new(StubOperations::new().on(
        OperationName::DeleteWorkflowRevisionAlias,
        DeleteRevisionAliasResponse::Ok,
    ));
    let revisions = RevisionOp::new(stub);

    revisions.delete_alias("wf-1", 1).await.unwrap();
}

#[tokio::test]
async fn test_update_alias_forbidden() {
    let stub = Arc::new(StubOperations::new().on(
        OperationName::UpdateWorkflowRevisionAlias,
        UpdateRevisionAliasResponse::Forbidden(ErrorBody {
            message: "alias is locked".to_string(),
        }),
    ));
    let revisions = RevisionOp::new(stub);

    let err = revisions
        .update_alias("wf-1", 1, alias_request("stable"))
        .await
        .unwrap_err();
    assert!(is_forbidden_error(&err));
    assert_eq!(
        err.to_string(),
        "workflows: Revision.UpdateAlias: 403 Forbidden: alias is locked"
    );
}

// =============================================================================
// Failure mapping
// =============================================================================

#[tokio::test]
async fn test_create_failures() {
    common::assert_declared_failures(
        OperationName::CreateWorkflowRevision,
        "Revision.Create",
        failure_cases!(CreateRevisionResponse),
        |stub| async move { RevisionOp::new(stub).create("wf-1", create_request()).await },
    )
    .await;
    common::assert_statusless_failures(
        OperationName::CreateWorkflowRevision,
        "Revision.Create",
        CreateRevisionResponse::Unexpected(teapot()),
        |stub| async move { RevisionOp::new(stub).create("wf-1", create_request()).await },
    )
    .await;
}

#[tokio::test]
async fn test_list_failures() {
    common::assert_declared_failures(
        OperationName::ListWorkflowRevisions,
        "Revision.List",
        failure_cases!(ListRevisionsResponse),
        |stub| async move { RevisionOp::new(stub).list(Default::default()).await },
    )
    .await;
    common::assert_statusless_failures(
        OperationName::ListWorkflowRevisions,
        "Revision.List",
        ListRevisionsResponse::Unexpected(teapot()),
        |stub| async move { RevisionOp::new(stub).list(Default::default()).await },
    )
    .await;
}

#[tokio::test]
async fn test_read_failures() {
    common::assert_declared_failures(
        OperationName::GetWorkflowRevision,
        "Revision.Read",
        failure_cases!(GetRevisionResponse),
        |stub| async move { RevisionOp::new(stub).read("wf-1", 1).await },
    )
    .await;
    common::assert_statusless_failures(
        OperationName::GetWorkflowRevision,
        "Revision.Read",
        GetRevisionResponse::Unexpected(teapot()),
        |stub| async move { RevisionOp::new(stub).read("wf-1", 1).await },
    )
    .await;
}

#[tokio::test]
async fn test_update_alias_failures() {
    common::assert_declared_failures(
        OperationName::UpdateWorkflowRevisionAlias,
        "Revision.UpdateAlias",
        failure_cases!(UpdateRevisionAliasResponse),
        |stub| async move {
            RevisionOp::new(stub)
                .update_alias("wf-1", 1, alias_request("v2"))
                .await
        },
    )
    .await;
    common::assert_statusless_failures(
        OperationName::UpdateWorkflowRevisionAlias,
        "Revision.UpdateAlias",
        UpdateRevisionAliasResponse::Unexpected(teapot()),
        |stub| async move {
            RevisionOp::new(stub)
                .update_alias("wf-1", 1, alias_request("v2"))
                .await
        },
    )
    .await;
}

#[tokio::test]
async fn test_delete_alias_failures() {
    common::assert_declared_failures(
        OperationName::DeleteWorkflowRevisionAlias,
        "Revision.DeleteAlias",
        failure_cases!(DeleteRevisionAliasResponse),
        |stub| async move { RevisionOp::new(stub).delete_alias("wf-1", 1).await },
    )
    .await;
    common::assert_statusless_failures(
        OperationName::DeleteWorkflowRevisionAlias,
        "Revision.DeleteAlias",
        DeleteRevisionAliasResponse::Unexpected(teapot()),
        |stub| async move { RevisionOp::new(stub).delete_alias("wf-1", 1).await },
    )
    .await;
}
