//! HTTP client for the workflow-task XML feed.
//!
//! The feed is a flat sequence of `<TasksList_Json>` blocks rather than a
//! schema'd document, so extraction works block by block with anchored
//! patterns. Date fields may carry an explicit `xsi:nil="true"` marker,
//! which means absent, not empty.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::tasks::WorkflowTask;
use crate::ports::{SourceError, WorkflowTaskSource};

use super::{check_status, map_transport_error};

static BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<TasksList_Json>.*?</TasksList_Json>").unwrap());
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<Title>(.*?)</Title>").unwrap());
static WORKSPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<ParentWorkspace_InternalId>(.*?)</ParentWorkspace_InternalId>").unwrap()
});
static BEGIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<BeginDate>(.*?)</BeginDate>").unwrap());
static BEGIN_NIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<BeginDate[^>]*xsi:nil="true""#).unwrap());
static END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<EndDateTime>(.*?)</EndDateTime>").unwrap());
static END_NIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<EndDateTime[^>]*xsi:nil="true""#).unwrap());

/// Fetches workflow tasks from the provider's XML endpoint.
pub struct MendixTaskClient {
    client: reqwest::Client,
    url: String,
}

impl MendixTaskClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl WorkflowTaskSource for MendixTaskClient {
    async fn fetch_tasks(&self) -> Result<Vec<WorkflowTask>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = check_status(response)?
            .text()
            .await
            .map_err(map_transport_error)?;
        Ok(parse_tasks_xml(&body))
    }
}

/// Extracts every task block from the feed body.
pub fn parse_tasks_xml(xml: &str) -> Vec<WorkflowTask> {
    BLOCK
        .find_iter(xml)
        .map(|block| parse_task_block(block.as_str()))
        .collect()
}

fn parse_task_block(block: &str) -> WorkflowTask {
    WorkflowTask {
        title: tag_value(&TITLE, block),
        workspace_id: tag_value(&WORKSPACE, block),
        begin: date_field(&BEGIN, &BEGIN_NIL, block),
        end: date_field(&END, &END_NIL, block),
    }
}

fn tag_value(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .map(|c| c[1].trim().to_string())
        .filter(|v| !v.is_empty())
}

fn date_field(pattern: &Regex, nil_pattern: &Regex, block: &str) -> Option<DateTime<Utc>> {
    if nil_pattern.is_match(block) {
        return None;
    }
    tag_value(pattern, block).and_then(|raw| parse_instant(&raw))
}

/// Parses an upstream timestamp, recovering malformed values to absent.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
