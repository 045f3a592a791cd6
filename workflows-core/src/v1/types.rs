//! Request and response bodies of the v1 API.
//!
//! Field names are camelCase on the wire. Optional request fields are left
//! out of the JSON when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Workflows
// =============================================================================

/// A workflow definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Workflow identifier.
    pub id: String,
    /// Workflow name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the workflow can be executed.
    pub publish: bool,
    /// Whether execution logs are kept.
    pub logging: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful single-workflow response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEnvelope {
    /// The workflow.
    pub workflow: Workflow,
}

/// A page of workflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowList {
    /// Total number of workflows matching the query.
    #[serde(default)]
    pub total: u64,
    /// Workflows on this page.
    pub workflows: Vec<Workflow>,
}

/// A name completion candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSuggest {
    /// Workflow identifier.
    pub id: String,
    /// Workflow name.
    pub name: String,
}

/// Name completion candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSuggestList {
    /// Matching workflows.
    pub suggests: Vec<WorkflowSuggest>,
}

/// Body of `POST workflows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowRequest {
    /// Workflow name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Runbook source (YAML).
    pub runbook: String,
    /// Whether the workflow can be executed.
    pub publish: bool,
    /// Whether execution logs are kept.
    pub logging: bool,
}

/// Body of `PATCH workflows/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New publish flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
    /// New logging flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<bool>,
}

// =============================================================================
// Revisions
// =============================================================================

/// An immutable runbook version of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Revision number, unique within the workflow.
    pub revision_id: i64,
    /// Owning workflow.
    pub workflow_id: String,
    /// Runbook source (YAML).
    pub runbook: String,
    /// Optional alias such as `v1`.
    #[serde(default)]
    pub revision_alias: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful single-revision response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionEnvelope {
    /// The revision.
    pub revision: Revision,
}

/// A page of revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionList {
    /// Total number of revisions.
    #[serde(default)]
    pub total: u64,
    /// Revisions on this page.
    pub revisions: Vec<Revision>,
}

/// Body of `POST workflows/{id}/revisions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRevisionRequest {
    /// Runbook source (YAML).
    pub runbook: String,
    /// Optional alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_alias: Option<String>,
}

/// Body of `PUT workflows/{id}/revisions/{revisionId}/alias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRevisionAliasRequest {
    /// New alias.
    pub revision_alias: String,
}

// =============================================================================
// Executions
// =============================================================================

/// Lifecycle state of an execution.
///
/// States this client does not know about are kept verbatim in
/// [`ExecutionStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExecutionStatus {
    /// Waiting to start.
    Queued,
    /// Running.
    Running,
    /// Finished successfully.
    Succeeded,
    /// Finished with an error.
    Failed,
    /// Cancellation requested but not yet complete.
    Cancelling,
    /// Cancelled.
    Cancelled,
    /// A state this client does not know about, as sent by the server.
    Unknown(String),
}

impl ExecutionStatus {
    /// The wire name of the state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelling => "cancelling",
            Self::Cancelled => "cancelled",
            Self::Unknown(other) => other,
        }
    }
}

impl From<String> for ExecutionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "queued" => Self::Queued,
            "running" => Self::Running,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "cancelling" => Self::Cancelling,
            "cancelled" => Self::Cancelled,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow reference embedded in an execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Workflow identifier.
    pub id: String,
    /// Workflow name.
    pub name: String,
}

/// One run of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Execution identifier.
    pub execution_id: String,
    /// Executed workflow.
    pub workflow: WorkflowSummary,
    /// Executed revision.
    #[serde(default)]
    pub revision_id: Option<i64>,
    /// Optional execution name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current state.
    pub status: ExecutionStatus,
    /// Arguments as a JSON string.
    #[serde(default)]
    pub args: Option<String>,
    /// Result as a JSON string, once finished.
    #[serde(default)]
    pub output: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// When the first step started.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the execution reached a final state.
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Body of a successful single-execution response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionEnvelope {
    /// The execution.
    pub execution: Execution,
}

/// A page of executions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionList {
    /// Total number of executions.
    #[serde(default)]
    pub total: u64,
    /// Executions on this page.
    pub executions: Vec<Execution>,
}

/// Body of `POST workflows/{id}/executions`.
///
/// Without a revision selector, the latest revision runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExecutionRequest {
    /// Optional execution name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Arguments as a JSON string, e.g. `{"maxNumber": 100}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Run this revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<i64>,
    /// Run the revision with this alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_alias: Option<String>,
}

/// One step event of an execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Event kind, e.g. `StepStarted`.
    pub event_type: String,
    /// Step the event belongs to.
    #[serde(default)]
    pub step_name: Option<String>,
    /// Event detail.
    #[serde(default)]
    pub message: Option<String>,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
}

/// Step history of an execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionHistory {
    /// Total number of events.
    #[serde(default)]
    pub total: u64,
    /// Events in order.
    pub histories: Vec<HistoryEntry>,
}

// =============================================================================
// Subscription
// =============================================================================

/// A billing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier.
    pub id: String,
    /// Plan name.
    pub name: String,
    /// Plan tier; higher is larger.
    #[serde(default)]
    pub grade: Option<i64>,
    /// Monthly price.
    #[serde(default)]
    pub price: Option<i64>,
}

/// Available billing plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanList {
    /// Plans.
    pub plans: Vec<Plan>,
}

/// The plan currently subscribed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlan {
    /// Plan identifier.
    pub plan_id: String,
    /// Plan name.
    #[serde(default)]
    pub plan_name: Option<String>,
    /// When the subscription started.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

/// Billing subscription of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Current plan, absent when no plan is set.
    #[serde(default)]
    pub current_plan: Option<CurrentPlan>,
}

/// Body of `POST subscription`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    /// Plan to subscribe to.
    pub plan_id: String,
}

// =============================================================================
// Failures
// =============================================================================

/// Body of every declared failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Server-provided message.
    pub message: String,
}

impl ErrorBody {
    /// Parse a failure body.
    ///
    /// Falls back to an `error` field, then to the raw body text, so a
    /// failure is never lost to a malformed body.
    pub fn from_body(body: &[u8]) -> Self {
        if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
            return parsed;
        }
        let text = String::from_utf8_lossy(body).into_owned();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|json| {
                json["error"]
                    .as_str()
                    .or_else(|| json["message"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or(text);
        Self { message }
    }
}
