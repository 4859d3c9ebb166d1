//! HTTP adapters built on Axum.

pub mod report;
