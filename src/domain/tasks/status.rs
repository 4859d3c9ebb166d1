//! Lifecycle status derivation.
//!
//! A request's status is read off the workflow-relevant subset of its
//! tasks: steps the catalog knows, a few auxiliary workflow markers, and a
//! last-resort lexical match for untranslated or unmapped upstream titles.
//! Derivation is a pure function of that set and is re-evaluated from
//! scratch on every report pass; there is no stored previous state.

use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::foundation::LifecycleStatus;

use super::model::WorkflowTask;

/// Auxiliary workflow markers that count as relevant without belonging to
/// any SLA category. Normalized forms.
const AUX_WORKFLOW_MARKERS: &[&str] = &[
    "confirmar execucao do contrato",
    "confirm contract execution",
];

/// Last-resort lexical predicate for workflow relevance.
///
/// Upstream titles are sometimes untranslated or missing from the catalog;
/// anything mentioning contracts, signatures or awards is still a workflow
/// step. Kept separate from catalog lookup on purpose so it can be
/// tightened without touching the canonical tables.
pub fn matches_workflow_pattern(canonical: &str) -> bool {
    canonical.contains("contract")
        || canonical.contains("contrato")
        || canonical.contains("signed")
        || canonical.contains("assinatura")
        || canonical.contains("award")
}

/// Derives lifecycle status from a request's task set.
pub struct StatusDeriver<'a> {
    catalog: &'a CategoryCatalog,
    aliases: &'a AliasTable,
}

impl<'a> StatusDeriver<'a> {
    pub fn new(catalog: &'a CategoryCatalog, aliases: &'a AliasTable) -> Self {
        Self { catalog, aliases }
    }

    /// Whether a task participates in status derivation.
    pub fn is_workflow_relevant(&self, task: &WorkflowTask) -> bool {
        let Some(title) = task.title_str() else {
            return false;
        };
        let canonical = self.aliases.resolve(title);
        self.catalog.contains_step(&canonical)
            || AUX_WORKFLOW_MARKERS.contains(&canonical.as_str())
            || matches_workflow_pattern(&canonical)
    }

    /// Classifies the request's lifecycle status.
    ///
    /// Over the workflow-relevant subset: empty or all-unstarted is
    /// `NotStarted`; any open task wins as `InProgress`; all finished is
    /// `Completed`; any other mix is `Waiting`. Input order never matters.
    pub fn derive(&self, tasks: &[WorkflowTask]) -> LifecycleStatus {
        let relevant: Vec<&WorkflowTask> = tasks
            .iter()
            .filter(|t| self.is_workflow_relevant(t))
            .collect();

        if relevant.is_empty() || relevant.iter().all(|t| t.is_pending()) {
            return LifecycleStatus::NotStarted;
        }
        if relevant.iter().any(|t| t.is_open()) {
            return LifecycleStatus::InProgress;
        }
        if relevant.iter().all(|t| t.is_finished()) {
            return LifecycleStatus::Completed;
        }
        LifecycleStatus::Waiting
    }
}
