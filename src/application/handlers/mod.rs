//! Application handlers.
//!
//! Query handlers that orchestrate upstream fetches and domain
//! aggregation for the reporting endpoints.

pub mod report;
