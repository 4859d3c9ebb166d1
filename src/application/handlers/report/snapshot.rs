//! Per-report snapshot of both upstream feeds.

use crate::domain::foundation::{normalize, normalize_opt};
use crate::domain::tasks::{PurchaseRequest, TaskIndex};
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::error::ReportError;

/// Immutable snapshot backing one report computation.
///
/// Both feeds are fetched fresh for every report; there is no caching
/// across requests. The two fetches run concurrently and either failure
/// fails the snapshot as a whole.
pub struct ReportSnapshot {
    pub requests: Vec<PurchaseRequest>,
    pub index: TaskIndex,
}

impl ReportSnapshot {
    pub async fn fetch(
        request_source: &dyn PurchaseRequestSource,
        task_source: &dyn WorkflowTaskSource,
    ) -> Result<Self, ReportError> {
        let (requests, tasks) =
            tokio::try_join!(request_source.fetch_requests(), task_source.fetch_tasks())?;
        Ok(Self {
            requests,
            index: TaskIndex::build(tasks),
        })
    }

    /// In-scope requests, optionally restricted to one owner.
    ///
    /// Owner matching is exact after normalization on both sides.
    pub fn in_scope_requests(&self, owner_filter: Option<&str>) -> Vec<&PurchaseRequest> {
        let owner = owner_filter.map(normalize).filter(|o| !o.is_empty());
        self.requests
            .iter()
            .filter(|r| r.is_in_scope())
            .filter(|r| match &owner {
                Some(owner) => normalize_opt(r.owner_email.as_deref()) == *owner,
                None => true,
            })
            .collect()
    }
}
