//! Per-category and total process aging for a single purchase request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::{
    business_days_at_least_one, business_days_between, CountPolicy,
};
use crate::domain::tasks::WorkflowTask;

/// Accumulated aging for one category, next to its fixed SLA target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAging {
    pub category: String,
    pub elapsed_days: i64,
    pub target_days: u32,
}

/// Full aging picture of one request's process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAging {
    pub categories: Vec<CategoryAging>,
    /// Business days from the earliest begin to the process end boundary.
    pub total_elapsed_days: i64,
    /// Sum of all category targets.
    pub total_target_days: u32,
}

/// Computes aging figures over a request's task snapshot.
pub struct AgingCalculator<'a> {
    catalog: &'a CategoryCatalog,
    aliases: &'a AliasTable,
}

impl<'a> AgingCalculator<'a> {
    pub fn new(catalog: &'a CategoryCatalog, aliases: &'a AliasTable) -> Self {
        Self { catalog, aliases }
    }

    /// Per-category accumulated aging.
    ///
    /// Every started task whose canonical title the catalog knows
    /// contributes its duration to the owning category: closed-inclusive
    /// when it finished, exclude-start against `now` while it is open.
    /// Each started step contributes at least one day. Categories with no
    /// matching task report zero against their target.
    pub fn category_aging(&self, tasks: &[WorkflowTask], now: DateTime<Utc>) -> Vec<CategoryAging> {
        let mut rows: Vec<CategoryAging> = self
            .catalog
            .categories()
            .iter()
            .map(|c| CategoryAging {
                category: c.name.clone(),
                elapsed_days: 0,
                target_days: c.sla_target_days,
            })
            .collect();

        for task in tasks {
            let Some(begin) = task.begin else { continue };
            let Some(title) = task.title_str() else { continue };
            let canonical = self.aliases.resolve(title);
            let Some(category) = self.catalog.category_of(&canonical) else {
                continue;
            };

            let days = match task.end {
                Some(end) => business_days_at_least_one(
                    begin.date_naive(),
                    end.date_naive(),
                    CountPolicy::ClosedInclusive,
                ),
                None => business_days_at_least_one(
                    begin.date_naive(),
                    now.date_naive(),
                    CountPolicy::ExcludeStart,
                ),
            };

            if let Some(row) = rows.iter_mut().find(|r| r.category == category.name) {
                row.elapsed_days += days;
            }
        }

        rows
    }

    /// Business days spanned by the whole process.
    ///
    /// Earliest begin across all titled tasks through the latest end, or
    /// through `now` while any titled task is still open or pending. Zero
    /// when no task has begun.
    pub fn total_process_aging(&self, tasks: &[WorkflowTask], now: DateTime<Utc>) -> i64 {
        let titled: Vec<&WorkflowTask> = tasks.iter().filter(|t| t.title_str().is_some()).collect();

        let Some(earliest_begin) = titled.iter().filter_map(|t| t.begin).min() else {
            return 0;
        };

        let unfinished = titled.iter().any(|t| t.is_open() || t.is_pending());
        let boundary = if unfinished {
            now
        } else {
            titled.iter().filter_map(|t| t.end).max().unwrap_or(now)
        };

        business_days_between(
            earliest_begin.date_naive(),
            boundary.date_naive(),
            CountPolicy::ClosedInclusive,
        )
    }

    /// Combined per-category and total view served by the process-aging
    /// report.
    pub fn process_aging(&self, tasks: &[WorkflowTask], now: DateTime<Utc>) -> ProcessAging {
        ProcessAging {
            categories: self.category_aging(tasks, now),
            total_elapsed_days: self.total_process_aging(tasks, now),
            total_target_days: self.catalog.total_target_days(),
        }
    }
}

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;
