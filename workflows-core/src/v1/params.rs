//! Path and query parameters of the v1 operations.

/// Identifies a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowParams {
    /// Workflow identifier.
    pub id: String,
}

/// Query of `list_workflows`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkflowsParams {
    /// Number of entries to skip.
    pub offset: Option<u32>,
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Only workflows whose name contains this string.
    pub name: Option<String>,
}

/// Query of `list_workflow_suggest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkflowSuggestParams {
    /// Name prefix to complete.
    pub name: String,
}

/// Identifies a revision of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionParams {
    /// Workflow identifier.
    pub id: String,
    /// Revision number.
    pub revision_id: i64,
}

/// Path and query of `list_workflow_revisions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRevisionsParams {
    /// Workflow identifier.
    pub id: String,
    /// Number of entries to skip.
    pub offset: Option<u32>,
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
}

/// Identifies an execution of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Workflow identifier.
    pub id: String,
    /// Execution identifier.
    pub execution_id: String,
}

/// Path and query of `list_executions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExecutionsParams {
    /// Workflow identifier.
    pub id: String,
    /// Number of entries to skip.
    pub offset: Option<u32>,
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
}
