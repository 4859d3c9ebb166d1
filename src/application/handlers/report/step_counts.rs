//! CountStepsHandler - occurrence counts of currently-open steps.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::aging::{StepAccumulator, StepCount};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::error::ReportError;
use super::snapshot::ReportSnapshot;

/// Query for the step-occurrence report.
#[derive(Debug, Clone, Default)]
pub struct StepCountsQuery {
    pub owner: Option<String>,
    /// Restrict to one step (raw title, alias-resolved here).
    pub step: Option<String>,
}

/// Counts how many in-scope requests currently sit on each catalog step.
pub struct CountStepsHandler {
    request_source: Arc<dyn PurchaseRequestSource>,
    task_source: Arc<dyn WorkflowTaskSource>,
    catalog: Arc<CategoryCatalog>,
    aliases: Arc<AliasTable>,
}

impl CountStepsHandler {
    pub fn new(
        request_source: Arc<dyn PurchaseRequestSource>,
        task_source: Arc<dyn WorkflowTaskSource>,
        catalog: Arc<CategoryCatalog>,
        aliases: Arc<AliasTable>,
    ) -> Self {
        Self {
            request_source,
            task_source,
            catalog,
            aliases,
        }
    }

    pub async fn handle(&self, query: StepCountsQuery) -> Result<Vec<StepCount>, ReportError> {
        let snapshot =
            ReportSnapshot::fetch(self.request_source.as_ref(), self.task_source.as_ref()).await?;
        let now = Utc::now();

        let step_filter = query
            .step
            .as_deref()
            .map(|s| self.aliases.resolve(s))
            .filter(|s| !s.is_empty());

        let mut accumulator = StepAccumulator::new(&self.catalog, &self.aliases);
        for request in snapshot.in_scope_requests(query.owner.as_deref()) {
            for task in snapshot.index.tasks_for_request(request) {
                accumulator.observe(task, step_filter.as_deref(), now);
            }
        }

        Ok(accumulator.counts())
    }
}
