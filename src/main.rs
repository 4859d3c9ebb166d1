//! SLA Radar service entry point.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use sla_radar::adapters::http::report::{report_routes, ReportAppState};
use sla_radar::adapters::mendix::{MendixRequestClient, MendixTaskClient};
use sla_radar::config::AppConfig;
use sla_radar::domain::catalog::{AliasTable, CategoryCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.timeout_secs))
        .danger_accept_invalid_certs(config.upstream.danger_accept_invalid_certs)
        .build()?;

    let state = ReportAppState {
        request_source: Arc::new(MendixRequestClient::new(
            client.clone(),
            config.upstream.requests_url.clone(),
        )),
        task_source: Arc::new(MendixTaskClient::new(
            client,
            config.upstream.tasks_url.clone(),
        )),
        catalog: Arc::new(CategoryCatalog::default_catalog()),
        aliases: Arc::new(AliasTable::default_table()),
    };

    let cors = build_cors(&config);
    let app = report_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "starting sla-radar");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new().allow_origin(parsed).allow_methods(Any)
}
