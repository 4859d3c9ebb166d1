//! Response DTOs for the reporting endpoints.

use serde::Serialize;

use crate::application::handlers::report::{
    ProcessAgingResult, SlaSummaryResult, StepAveragesResult,
};
use crate::domain::aging::{CategoryAging, CategoryBuckets, RankedRequest, StepAverage, StepCount};
use crate::domain::foundation::LifecycleStatus;

/// Error payload shared by every endpoint: stable code plus message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaSummaryResponse {
    pub rows: Vec<CategoryBuckets>,
    pub requests_considered: usize,
}

impl From<SlaSummaryResult> for SlaSummaryResponse {
    fn from(result: SlaSummaryResult) -> Self {
        Self {
            rows: result.summary.rows,
            requests_considered: result.requests_considered,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAgingResponse {
    pub workspace_id: String,
    pub status: LifecycleStatus,
    pub status_label: String,
    pub categories: Vec<CategoryAging>,
    pub total_elapsed_days: i64,
    pub total_target_days: u32,
}

impl From<ProcessAgingResult> for ProcessAgingResponse {
    fn from(result: ProcessAgingResult) -> Self {
        Self {
            workspace_id: result.workspace_id,
            status: result.status,
            status_label: result.status.label().to_string(),
            categories: result.aging.categories,
            total_elapsed_days: result.aging.total_elapsed_days,
            total_target_days: result.aging.total_target_days,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCountsResponse {
    pub steps: Vec<StepCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAveragesResponse {
    pub steps: Vec<StepAverage>,
    pub overall_average_days: f64,
}

impl From<StepAveragesResult> for StepAveragesResponse {
    fn from(result: StepAveragesResult) -> Self {
        Self {
            steps: result.steps,
            overall_average_days: result.overall_average_days,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub rows: Vec<RankedRequest>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
