//! Aging and SLA aggregation.
//!
//! Everything here is pure over a task snapshot: per-category and total
//! process aging, SLA bucket summaries, step-occurrence statistics and
//! the aging ranking.

mod process;
mod ranking;
mod steps;
mod summary;

pub use process::{AgingCalculator, CategoryAging, ProcessAging};
pub use ranking::{rank_by_aging, RankedRequest, RequestAging};
pub use steps::{Rounding, StepAccumulator, StepAverage, StepCount};
pub use summary::{BucketCounts, CategoryBuckets, SlaBucket, SlaSummarizer, SlaSummary};
