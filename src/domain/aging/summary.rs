//! SLA bucket summary across in-scope purchase requests.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::{
    business_days_between, CountPolicy, LifecycleStatus,
};
use crate::domain::tasks::WorkflowTask;

/// Where an open step stands against its category target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaBucket {
    OnTime,
    NearDue,
    Overdue,
}

impl SlaBucket {
    /// Buckets an elapsed business-day count against a target `T`:
    /// above `T` is overdue, at or past `ceil(0.8 * T)` is near-due,
    /// anything below is on time.
    pub fn classify(elapsed_days: i64, target_days: u32) -> Self {
        let target = i64::from(target_days);
        if elapsed_days > target {
            SlaBucket::Overdue
        } else if elapsed_days >= near_due_floor(target_days) {
            SlaBucket::NearDue
        } else {
            SlaBucket::OnTime
        }
    }
}

/// `ceil(0.8 * target)` in integer arithmetic.
fn near_due_floor(target_days: u32) -> i64 {
    (i64::from(target_days) * 4 + 4) / 5
}

/// Bucket tallies for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    pub on_time: u32,
    pub near_due: u32,
    pub overdue: u32,
}

impl BucketCounts {
    fn record(&mut self, bucket: SlaBucket) {
        match bucket {
            SlaBucket::OnTime => self.on_time += 1,
            SlaBucket::NearDue => self.near_due += 1,
            SlaBucket::Overdue => self.overdue += 1,
        }
    }

    fn merge(&mut self, other: &BucketCounts) {
        self.on_time += other.on_time;
        self.near_due += other.near_due;
        self.overdue += other.overdue;
    }

    pub fn total(&self) -> u32 {
        self.on_time + self.near_due + self.overdue
    }
}

/// Bucket tallies per category, in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaSummary {
    pub rows: Vec<CategoryBuckets>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBuckets {
    pub category: String,
    #[serde(flatten)]
    pub counts: BucketCounts,
}

impl SlaSummary {
    /// Empty summary with one zeroed row per catalog category.
    pub fn empty(catalog: &CategoryCatalog) -> Self {
        Self {
            rows: catalog
                .categories()
                .iter()
                .map(|c| CategoryBuckets {
                    category: c.name.clone(),
                    counts: BucketCounts::default(),
                })
                .collect(),
        }
    }

    /// Adds another summary's tallies into this one, row by row.
    pub fn merge(&mut self, other: &SlaSummary) {
        for row in &other.rows {
            if let Some(mine) = self.rows.iter_mut().find(|r| r.category == row.category) {
                mine.counts.merge(&row.counts);
            }
        }
    }

    pub fn counts_for(&self, category: &str) -> Option<&BucketCounts> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| &r.counts)
    }
}

/// Buckets one request's open steps against their category targets.
pub struct SlaSummarizer<'a> {
    catalog: &'a CategoryCatalog,
    aliases: &'a AliasTable,
}

impl<'a> SlaSummarizer<'a> {
    pub fn new(catalog: &'a CategoryCatalog, aliases: &'a AliasTable) -> Self {
        Self { catalog, aliases }
    }

    /// Summarizes a single request.
    ///
    /// Only requests currently in progress contribute; every other
    /// lifecycle status yields an all-zero summary. For contributing
    /// requests, each open categorized task is bucketed by the business
    /// days elapsed since its begin. `step_filter`, when set, restricts
    /// counting to one canonical step.
    pub fn summarize_request(
        &self,
        tasks: &[WorkflowTask],
        status: LifecycleStatus,
        step_filter: Option<&str>,
        now: DateTime<Utc>,
    ) -> SlaSummary {
        let mut summary = SlaSummary::empty(self.catalog);
        if status != LifecycleStatus::InProgress {
            return summary;
        }

        for task in tasks {
            if !task.is_open() {
                continue;
            }
            let Some(title) = task.title_str() else { continue };
            let canonical = self.aliases.resolve(title);
            if let Some(filter) = step_filter {
                if canonical != filter {
                    continue;
                }
            }
            let Some(category) = self.catalog.category_of(&canonical) else {
                continue;
            };

            let Some(begin) = task.begin else { continue };
            let elapsed = business_days_between(
                begin.date_naive(),
                now.date_naive(),
                CountPolicy::HalfOpenForward,
            );
            let bucket = SlaBucket::classify(elapsed, category.sla_target_days);

            if let Some(row) = summary.rows.iter_mut().find(|r| r.category == category.name) {
                row.counts.record(bucket);
            }
        }

        summary
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
