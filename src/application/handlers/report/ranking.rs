//! RankRequestsHandler - requests ordered by total elapsed aging.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::aging::{rank_by_aging, AgingCalculator, RankedRequest, RequestAging};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::LifecycleStatus;
use crate::domain::tasks::StatusDeriver;
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::error::ReportError;
use super::snapshot::ReportSnapshot;

/// Query for the aging ranking.
#[derive(Debug, Clone, Default)]
pub struct RankingQuery {
    pub owner: Option<String>,
    /// Free-text lifecycle filter, recognized by keyword ("exec" matches
    /// in-progress). Unrecognized text disables the filter.
    pub status: Option<String>,
    pub limit: Option<usize>,
}

/// Ranks in-scope requests by total process aging, most aged first.
pub struct RankRequestsHandler {
    request_source: Arc<dyn PurchaseRequestSource>,
    task_source: Arc<dyn WorkflowTaskSource>,
    catalog: Arc<CategoryCatalog>,
    aliases: Arc<AliasTable>,
}

impl RankRequestsHandler {
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

    pub async fn handle(&self, query: RankingQuery) -> Result<Vec<RankedRequest>, ReportError> {
        let snapshot =
            ReportSnapshot::fetch(self.request_source.as_ref(), self.task_source.as_ref()).await?;
        let now = Utc::now();

        let status_filter = query.status.as_deref().and_then(LifecycleStatus::from_filter);

        let deriver = StatusDeriver::new(&self.catalog, &self.aliases);
        let calculator = AgingCalculator::new(&self.catalog, &self.aliases);

        let mut rows = Vec::new();
        for request in snapshot.in_scope_requests(query.owner.as_deref()) {
            let tasks = snapshot.index.tasks_for_request(request);
            let status = deriver.derive(tasks);
            if let Some(wanted) = status_filter {
                if status != wanted {
                    continue;
                }
            }
            let Some(id) = request.workspace_key() else { continue };
            rows.push(RequestAging {
                request_id: id.to_string(),
                title: request.title.clone(),
                owner: request.owner_email.clone(),
                status,
                elapsed_days: calculator.total_process_aging(tasks, now),
                balance: request.balance,
            });
        }

        Ok(rank_by_aging(rows, query.limit))
    }
}
