//! Report query handlers.
//!
//! One handler per reporting entry point, each orchestrating the same
//! pipeline: fetch a fresh snapshot of both feeds, index tasks by
//! workspace, derive lifecycle status and feed the aging aggregators.

mod error;
mod process_aging;
mod ranking;
mod sla_summary;
mod snapshot;
mod step_averages;
mod step_counts;

pub use error::ReportError;
pub use process_aging::{GetProcessAgingHandler, ProcessAgingQuery, ProcessAgingResult};
pub use ranking::{RankRequestsHandler, RankingQuery};
pub use sla_summary::{GetSlaSummaryHandler, SlaSummaryQuery, SlaSummaryResult};
pub use snapshot::ReportSnapshot;
pub use step_averages::{GetStepAveragesHandler, StepAveragesQuery, StepAveragesResult};
pub use step_counts::{CountStepsHandler, StepCountsQuery};
