//! SLA Radar - Procurement workflow SLA reporting service
//!
//! Aggregates two upstream procurement feeds (purchase requests and
//! workflow tasks) into SLA reports: bucket summaries, per-workspace
//! aging, step statistics and an aging ranking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
