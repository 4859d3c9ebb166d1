//! Read-only port for the workflow-task feed.

use async_trait::async_trait;

use crate::domain::tasks::WorkflowTask;

use super::source_error::SourceError;

/// Supplies the current snapshot of workflow tasks across all workspaces.
///
/// Implementations must honor explicit nil markers on dates (a field
/// marked nil is absent, not empty) and recover malformed fields to
/// absent rather than failing the batch.
#[async_trait]
pub trait WorkflowTaskSource: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<WorkflowTask>, SourceError>;
}
