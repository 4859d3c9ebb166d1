//! Domain layer containing the task-classification and aging engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (text canonicalization, business-day
//!   calendar, lifecycle status)
//! - `catalog` - Static category catalog and alias table
//! - `tasks` - Upstream record models, workspace index, status deriver
//! - `aging` - Aging, SLA bucket and step-statistics aggregation
//!
//! The layer is pure: no I/O, no clocks (`now` is always injected), no
//! logging. Everything is computed fresh from a per-report snapshot.

pub mod aging;
pub mod catalog;
pub mod foundation;
pub mod tasks;
