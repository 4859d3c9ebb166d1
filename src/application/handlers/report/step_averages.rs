//! GetStepAveragesHandler - average open aging per canonical step.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::aging::{Rounding, StepAccumulator, StepAverage};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::error::ReportError;
use super::snapshot::ReportSnapshot;

/// Query for the step-average report.
#[derive(Debug, Clone, Default)]
pub struct StepAveragesQuery {
    pub owner: Option<String>,
}

/// Per-step averages plus the overall average across all counted tasks.
#[derive(Debug, Clone)]
pub struct StepAveragesResult {
    pub steps: Vec<StepAverage>,
    /// Truncated toward zero, unlike the per-step two-decimal averages.
    pub overall_average_days: f64,
}

/// Averages the open aging of every catalog step in the snapshot.
pub struct GetStepAveragesHandler {
    request_source: Arc<dyn PurchaseRequestSource>,
    task_source: Arc<dyn WorkflowTaskSource>,
    catalog: Arc<CategoryCatalog>,
    aliases: Arc<AliasTable>,
}

impl GetStepAveragesHandler {
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

    pub async fn handle(&self, query: StepAveragesQuery) -> Result<StepAveragesResult, ReportError> {
        let snapshot =
            ReportSnapshot::fetch(self.request_source.as_ref(), self.task_source.as_ref()).await?;
        let now = Utc::now();

        let mut accumulator = StepAccumulator::new(&self.catalog, &self.aliases);
        for request in snapshot.in_scope_requests(query.owner.as_deref()) {
            for task in snapshot.index.tasks_for_request(request) {
                accumulator.observe(task, None, now);
            }
        }

        Ok(StepAveragesResult {
            steps: accumulator.averages(Rounding::TwoDecimals),
            overall_average_days: accumulator.overall_average(),
        })
    }
}
