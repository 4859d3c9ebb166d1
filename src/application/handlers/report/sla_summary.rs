//! GetSlaSummaryHandler - SLA bucket counts across in-scope requests.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::aging::{SlaSummarizer, SlaSummary};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::tasks::StatusDeriver;
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::error::ReportError;
use super::snapshot::ReportSnapshot;

/// Query for the SLA summary report.
#[derive(Debug, Clone, Default)]
pub struct SlaSummaryQuery {
    /// Restrict to requests owned by this email.
    pub owner: Option<String>,
    /// Restrict bucketing to one step (raw title, alias-resolved here).
    pub step: Option<String>,
}

/// Summary plus the number of requests that were considered.
#[derive(Debug, Clone)]
pub struct SlaSummaryResult {
    pub summary: SlaSummary,
    pub requests_considered: usize,
}

/// Computes the per-category SLA bucket summary.
///
/// Fetches a fresh snapshot, derives each in-scope request's lifecycle
/// status and merges its bucket counts into a global summary. Requests
/// that are not in progress contribute zero across all buckets.
pub struct GetSlaSummaryHandler {
    request_source: Arc<dyn PurchaseRequestSource>,
    task_source: Arc<dyn WorkflowTaskSource>,
    catalog: Arc<CategoryCatalog>,
    aliases: Arc<AliasTable>,
}

impl GetSlaSummaryHandler {
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

    pub async fn handle(&self, query: SlaSummaryQuery) -> Result<SlaSummaryResult, ReportError> {
        let snapshot =
            ReportSnapshot::fetch(self.request_source.as_ref(), self.task_source.as_ref()).await?;
        let now = Utc::now();

        let step_filter = query
            .step
            .as_deref()
            .map(|s| self.aliases.resolve(s))
            .filter(|s| !s.is_empty());

        let deriver = StatusDeriver::new(&self.catalog, &self.aliases);
        let summarizer = SlaSummarizer::new(&self.catalog, &self.aliases);

        let requests = snapshot.in_scope_requests(query.owner.as_deref());
        let mut global = SlaSummary::empty(&self.catalog);
        for request in &requests {
            let tasks = snapshot.index.tasks_for_request(request);
            let status = deriver.derive(tasks);
            let one = summarizer.summarize_request(tasks, status, step_filter.as_deref(), now);
            global.merge(&one);
        }

        Ok(SlaSummaryResult {
            summary: global,
            requests_considered: requests.len(),
        })
    }
}
