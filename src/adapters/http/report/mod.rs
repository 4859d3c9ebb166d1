//! Reporting HTTP surface: DTOs, handlers and routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ReportApiError, ReportAppState};
pub use routes::report_routes;
