//! Groups raw workflow tasks by owning workspace.

use std::collections::HashMap;

use super::model::{PurchaseRequest, WorkflowTask};

/// Snapshot index of workflow tasks keyed by workspace id.
///
/// Built once per report computation from the raw task feed. Tasks without
/// a usable workspace id are dropped silently; missing routing information
/// is expected for malformed upstream rows, not an error.
#[derive(Debug, Default)]
pub struct TaskIndex {
    by_workspace: HashMap<String, Vec<WorkflowTask>>,
}

impl TaskIndex {
    pub fn build(tasks: Vec<WorkflowTask>) -> Self {
        let mut by_workspace: HashMap<String, Vec<WorkflowTask>> = HashMap::new();
        for task in tasks {
            let Some(ws) = task.workspace_id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            by_workspace.entry(ws.to_string()).or_default().push(task);
        }
        Self { by_workspace }
    }

    /// Tasks belonging to the given workspace id; empty when unknown.
    pub fn tasks_for(&self, workspace_id: &str) -> &[WorkflowTask] {
        self.by_workspace
            .get(workspace_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tasks belonging to a purchase request, resolved through its
    /// workspace-key fallback chain.
    pub fn tasks_for_request(&self, request: &PurchaseRequest) -> &[WorkflowTask] {
        request
            .workspace_key()
            .map(|key| self.tasks_for(key))
            .unwrap_or_default()
    }

    pub fn workspace_count(&self) -> usize {
        self.by_workspace.len()
    }
}
