//! Step-occurrence counts and average open aging per canonical step.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::{business_days_between, CountPolicy};
use crate::domain::tasks::WorkflowTask;

/// Per-endpoint averaging behavior.
///
/// The step-average report rounds to two decimals while the overall
/// average truncates toward zero; the distinction is deliberate and must
/// stay visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Truncate,
    TwoDecimals,
}

impl Rounding {
    fn average(&self, sum_days: i64, count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        match self {
            // Integer division: truncation toward zero.
            Rounding::Truncate => (sum_days / i64::from(count)) as f64,
            Rounding::TwoDecimals => {
                let raw = sum_days as f64 / f64::from(count);
                (raw * 100.0).round() / 100.0
            }
        }
    }
}

/// Occurrence count of one currently-open canonical step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCount {
    pub step: String,
    pub label: String,
    pub category: String,
    pub count: u32,
}

/// Average open aging of one canonical step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAverage {
    pub step: String,
    pub label: String,
    pub category: String,
    pub average_days: f64,
    pub task_count: u32,
}

#[derive(Debug, Clone)]
struct StepEntry {
    label: String,
    category: String,
    sum_days: i64,
    count: u32,
}

/// Accumulates open categorized tasks into per-step tallies.
///
/// Keyed by canonical step so variant spellings of the same step merge
/// into one row; the first observed upstream title is kept as the display
/// label unless the catalog knows a better one.
pub struct StepAccumulator<'a> {
    catalog: &'a CategoryCatalog,
    aliases: &'a AliasTable,
    entries: BTreeMap<String, StepEntry>,
}

impl<'a> StepAccumulator<'a> {
    pub fn new(catalog: &'a CategoryCatalog, aliases: &'a AliasTable) -> Self {
        Self {
            catalog,
            aliases,
            entries: BTreeMap::new(),
        }
    }

    /// Observes one task. Only currently-open tasks whose canonical title
    /// is a known category step are counted; `step_filter` restricts to a
    /// single canonical step.
    pub fn observe(&mut self, task: &WorkflowTask, step_filter: Option<&str>, now: DateTime<Utc>) {
        if !task.is_open() {
            return;
        }
        let Some(title) = task.title_str() else { return };
        let canonical = self.aliases.resolve(title);
        if let Some(filter) = step_filter {
            if canonical != filter {
                return;
            }
        }
        let Some(category) = self.catalog.category_of(&canonical) else {
            return;
        };
        let Some(begin) = task.begin else { return };

        let elapsed = business_days_between(
            begin.date_naive(),
            now.date_naive(),
            CountPolicy::HalfOpenForward,
        );

        let entry = self.entries.entry(canonical).or_insert_with(|| StepEntry {
            label: title.to_string(),
            category: category.name.clone(),
            sum_days: 0,
            count: 0,
        });
        entry.sum_days += elapsed;
        entry.count += 1;
    }

    /// Occurrence counts per step, most frequent first.
    pub fn counts(&self) -> Vec<StepCount> {
        let mut rows: Vec<StepCount> = self
            .entries
            .iter()
            .map(|(canonical, entry)| StepCount {
                step: canonical.clone(),
                label: entry.label.clone(),
                category: entry.category.clone(),
                count: entry.count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.step.cmp(&b.step)));
        rows
    }

    /// Average open aging per step under the given rounding, most aged
    /// first. Labels are restored from the catalog's display forms.
    pub fn averages(&self, rounding: Rounding) -> Vec<StepAverage> {
        let mut rows: Vec<StepAverage> = self
            .entries
            .iter()
            .map(|(canonical, entry)| StepAverage {
                step: canonical.clone(),
                label: self
                    .catalog
                    .step_label(canonical)
                    .unwrap_or(&entry.label)
                    .to_string(),
                category: entry.category.clone(),
                average_days: rounding.average(entry.sum_days, entry.count),
                task_count: entry.count,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.average_days
                .total_cmp(&a.average_days)
                .then_with(|| a.step.cmp(&b.step))
        });
        rows
    }

    /// Average across every counted task, truncating toward zero.
    pub fn overall_average(&self) -> f64 {
        let sum: i64 = self.entries.values().map(|e| e.sum_days).sum();
        let count: u32 = self.entries.values().map(|e| e.count).sum();
        Rounding::Truncate.average(sum, count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
