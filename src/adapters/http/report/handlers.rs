//! HTTP handlers for the reporting endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::report::{
    CountStepsHandler, GetProcessAgingHandler, GetSlaSummaryHandler, GetStepAveragesHandler,
    ProcessAgingQuery, RankRequestsHandler, RankingQuery, ReportError, SlaSummaryQuery,
    StepAveragesQuery, StepCountsQuery,
};
use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::ports::{PurchaseRequestSource, WorkflowTaskSource};

use super::dto::{
    ErrorResponse, HealthResponse, ProcessAgingResponse, RankingResponse, SlaSummaryResponse,
    StepAveragesResponse, StepCountsResponse,
};

/// Report API error that implements IntoResponse.
pub enum ReportApiError {
    BadRequest(ErrorResponse),
    BadGateway(ErrorResponse),
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReportApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ReportApiError::BadGateway(error) => (StatusCode::BAD_GATEWAY, error),
        };
        (status, Json(error)).into_response()
    }
}

impl From<ReportError> for ReportApiError {
    fn from(error: ReportError) -> Self {
        let body = ErrorResponse::new(error.kind(), error.to_string());
        match error {
            ReportError::MissingParameter { .. } => ReportApiError::BadRequest(body),
            ReportError::Upstream(_) => ReportApiError::BadGateway(body),
        }
    }
}

/// Shared application state containing the report dependencies.
#[derive(Clone)]
pub struct ReportAppState {
    pub request_source: Arc<dyn PurchaseRequestSource>,
    pub task_source: Arc<dyn WorkflowTaskSource>,
    pub catalog: Arc<CategoryCatalog>,
    pub aliases: Arc<AliasTable>,
}

impl ReportAppState {
    pub fn sla_summary_handler(&self) -> GetSlaSummaryHandler {
        GetSlaSummaryHandler::new(
            self.request_source.clone(),
            self.task_source.clone(),
            self.catalog.clone(),
            self.aliases.clone(),
        )
    }

    pub fn process_aging_handler(&self) -> GetProcessAgingHandler {
        GetProcessAgingHandler::new(
            self.task_source.clone(),
            self.catalog.clone(),
            self.aliases.clone(),
        )
    }

    pub fn step_counts_handler(&self) -> CountStepsHandler {
        CountStepsHandler::new(
            self.request_source.clone(),
            self.task_source.clone(),
            self.catalog.clone(),
            self.aliases.clone(),
        )
    }

    pub fn step_averages_handler(&self) -> GetStepAveragesHandler {
        GetStepAveragesHandler::new(
            self.request_source.clone(),
            self.task_source.clone(),
            self.catalog.clone(),
            self.aliases.clone(),
        )
    }

    pub fn ranking_handler(&self) -> RankRequestsHandler {
        RankRequestsHandler::new(
            self.request_source.clone(),
            self.task_source.clone(),
            self.catalog.clone(),
            self.aliases.clone(),
        )
    }
}

/// Query parameters for the SLA summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SlaSummaryParams {
    /// Optional owner email filter.
    pub user: Option<String>,
    /// Optional step title filter, alias-tolerant.
    pub step: Option<String>,
}

/// Query parameters for the process aging endpoint.
#[derive(Debug, Deserialize)]
pub struct ProcessAgingParams {
    /// Workspace identifier. Required; its absence is a 400.
    pub ws: Option<String>,
}

/// Query parameters for the step count endpoint.
#[derive(Debug, Deserialize)]
pub struct StepCountParams {
    pub user: Option<String>,
    pub step: Option<String>,
}

/// Query parameters for the step average endpoint.
#[derive(Debug, Deserialize)]
pub struct StepAverageParams {
    pub user: Option<String>,
}

/// Query parameters for the ranking endpoint.
#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub user: Option<String>,
    /// Free-text lifecycle filter ("exec", "concluido", ...).
    pub status: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/report/sla-summary?user=&step=
pub async fn get_sla_summary(
    State(state): State<ReportAppState>,
    Query(params): Query<SlaSummaryParams>,
) -> Result<Json<SlaSummaryResponse>, ReportApiError> {
    let query = SlaSummaryQuery {
        owner: params.user,
        step: params.step,
    };
    let result = state.sla_summary_handler().handle(query).await?;
    Ok(Json(SlaSummaryResponse::from(result)))
}

/// GET /api/report/process-aging?ws=
pub async fn get_process_aging(
    State(state): State<ReportAppState>,
    Query(params): Query<ProcessAgingParams>,
) -> Result<Json<ProcessAgingResponse>, ReportApiError> {
    let query = ProcessAgingQuery {
        workspace_id: params.ws.unwrap_or_default(),
    };
    let result = state.process_aging_handler().handle(query).await?;
    Ok(Json(ProcessAgingResponse::from(result)))
}

/// GET /api/report/step-counts?user=&step=
pub async fn get_step_counts(
    State(state): State<ReportAppState>,
    Query(params): Query<StepCountParams>,
) -> Result<Json<StepCountsResponse>, ReportApiError> {
    let query = StepCountsQuery {
        owner: params.user,
        step: params.step,
    };
    let steps = state.step_counts_handler().handle(query).await?;
    Ok(Json(StepCountsResponse { steps }))
}

/// GET /api/report/step-averages?user=&step=
pub async fn get_step_averages(
    State(state): State<ReportAppState>,
    Query(params): Query<StepAverageParams>,
) -> Result<Json<StepAveragesResponse>, ReportApiError> {
    let query = StepAveragesQuery { owner: params.user };
    let result = state.step_averages_handler().handle(query).await?;
    Ok(Json(StepAveragesResponse::from(result)))
}

/// GET /api/report/ranking?user=&status=&limit=
pub async fn get_ranking(
    State(state): State<ReportAppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<RankingResponse>, ReportApiError> {
    let query = RankingQuery {
        owner: params.user,
        status: params.status,
        limit: params.limit,
    };
    let rows = state.ranking_handler().handle(query).await?;
    Ok(Json(RankingResponse { rows }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
