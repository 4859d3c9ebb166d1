//! HTTP routes for the reporting endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_process_aging, get_ranking, get_sla_summary, get_step_averages, get_step_counts, health,
    ReportAppState,
};

/// Creates the report router with all routes.
pub fn report_routes(state: ReportAppState) -> Router {
    Router::new()
        .route("/api/report/sla-summary", get(get_sla_summary))
        .route("/api/report/process-aging", get(get_process_aging))
        .route("/api/report/step-counts", get(get_step_counts))
        .route("/api/report/step-averages", get(get_step_averages))
        .route("/api/report/ranking", get(get_ranking))
        .route("/health", get(health))
        .with_state(state)
}
