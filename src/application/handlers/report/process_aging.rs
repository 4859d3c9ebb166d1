//! GetProcessAgingHandler - classify and age one workspace's tasks.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::aging::{AgingCalculator, ProcessAging};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::LifecycleStatus;
use crate::domain::tasks::{StatusDeriver, TaskIndex};
use crate::ports::WorkflowTaskSource;

use super::error::ReportError;

/// Query for a single workspace's aging report.
#[derive(Debug, Clone)]
pub struct ProcessAgingQuery {
    pub workspace_id: String,
}

/// Aging and lifecycle picture of one workspace.
#[derive(Debug, Clone)]
pub struct ProcessAgingResult {
    pub workspace_id: String,
    pub status: LifecycleStatus,
    pub aging: ProcessAging,
}

/// Computes per-category and total aging for one workspace.
///
/// Only the task feed is consulted; the workspace id is the caller's
/// responsibility and is required.
pub struct GetProcessAgingHandler {
    task_source: Arc<dyn WorkflowTaskSource>,
    catalog: Arc<CategoryCatalog>,
    aliases: Arc<AliasTable>,
}

impl GetProcessAgingHandler {
    pub fn new(
        task_source: Arc<dyn WorkflowTaskSource>,
        catalog: Arc<CategoryCatalog>,
        aliases: Arc<AliasTable>,
    ) -> Self {
        Self {
            task_source,
            catalog,
            aliases,
        }
    }

    pub async fn handle(&self, query: ProcessAgingQuery) -> Result<ProcessAgingResult, ReportError> {
        let workspace_id = query.workspace_id.trim();
        if workspace_id.is_empty() {
            return Err(ReportError::MissingParameter { name: "ws" });
        }

        let tasks = self.task_source.fetch_tasks().await?;
        let index = TaskIndex::build(tasks);
        let workspace_tasks = index.tasks_for(workspace_id);
        let now = Utc::now();

        let status = StatusDeriver::new(&self.catalog, &self.aliases).derive(workspace_tasks);
        let aging = AgingCalculator::new(&self.catalog, &self.aliases).process_aging(workspace_tasks, now);

        Ok(ProcessAgingResult {
            workspace_id: workspace_id.to_string(),
            status,
            aging,
        })
    }
}
