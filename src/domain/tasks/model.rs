//! Upstream record shapes: workflow tasks and purchase requests.
//!
//! Both are read-only snapshots taken once per report computation. Field
//! names on [`PurchaseRequest`] mirror the provider payload, including the
//! `EmialOwner` misspelling the upstream has carried for years.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One workflow task from the XML feed.
///
/// Absent begin and end means the step has not started; a begin without an
/// end means it is in progress; both set means it finished. An end without
/// a begin does not occur in practice but is treated as finished with an
/// unknown start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowTask {
    /// Free-text step label as sent by the upstream.
    pub title: Option<String>,
    /// Workspace of the owning purchase request; absent means the task is
    /// unroutable and is dropped during indexing.
    pub workspace_id: Option<String>,
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl WorkflowTask {
    /// Started but not finished.
    pub fn is_open(&self) -> bool {
        self.begin.is_some() && self.end.is_none()
    }

    /// Finished, including the degenerate end-without-begin case.
    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Neither begun nor finished.
    pub fn is_pending(&self) -> bool {
        self.begin.is_none() && self.end.is_none()
    }

    pub fn title_str(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// One purchase request from the JSON provider.
///
/// Only `Level == "C"` requests with a non-empty internal id are in scope
/// for reporting; everything else is carried for display only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "_RequestInternalId", default)]
    pub internal_id: Option<String>,
    #[serde(rename = "ParentWorkspace_InternalId", default)]
    pub parent_workspace_id: Option<String>,
    #[serde(rename = "Workspace_InternalId", default)]
    pub workspace_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    // Upstream field is misspelled; accept the corrected spelling too.
    #[serde(rename = "EmialOwner", alias = "EmailOwner", default)]
    pub owner_email: Option<String>,
    #[serde(rename = "Level", default)]
    pub level: Option<String>,
    #[serde(rename = "Balance", default)]
    pub balance: Option<f64>,
    #[serde(rename = "Responsible", default)]
    pub responsible: Option<String>,
}

impl PurchaseRequest {
    /// Whether this request participates in SLA reporting.
    pub fn is_in_scope(&self) -> bool {
        self.level.as_deref() == Some("C")
            && self.internal_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// The join key used to look up this request's tasks.
    ///
    /// Tries the parent workspace id, then the request's own internal id,
    /// then the fallback workspace field; the first non-empty one wins.
    pub fn workspace_key(&self) -> Option<&str> {
        [
            self.parent_workspace_id.as_deref(),
            self.internal_id.as_deref(),
            self.workspace_id.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|id| !id.is_empty())
    }
}
