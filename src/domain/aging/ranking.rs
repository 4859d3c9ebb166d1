//! Ranks purchase requests by total elapsed aging.

use serde::Serialize;

use crate::domain::foundation::LifecycleStatus;

/// One ranked report row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRequest {
    pub position: u32,
    pub request_id: String,
    pub title: Option<String>,
    pub owner: Option<String>,
    pub status: LifecycleStatus,
    pub elapsed_days: i64,
    pub balance: Option<f64>,
}

/// Unranked aging row produced per request by the aggregation pass.
#[derive(Debug, Clone)]
pub struct RequestAging {
    pub request_id: String,
    pub title: Option<String>,
    pub owner: Option<String>,
    pub status: LifecycleStatus,
    pub elapsed_days: i64,
    pub balance: Option<f64>,
}

/// Orders rows by elapsed aging, most aged first, and assigns positions.
///
/// Ties break on request id so the ordering is stable across runs.
pub fn rank_by_aging(mut rows: Vec<RequestAging>, limit: Option<usize>) -> Vec<RankedRequest> {
    rows.sort_by(|a, b| {
        b.elapsed_days
            .cmp(&a.elapsed_days)
            .then_with(|| a.request_id.cmp(&b.request_id))
    });
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| RankedRequest {
            position: i as u32 + 1,
            request_id: row.request_id,
            title: row.title,
            owner: row.owner,
            status: row.status,
            elapsed_days: row.elapsed_days,
            balance: row.balance,
        })
        .collect()
}
