//! Errors surfaced by the upstream data sources.

use thiserror::Error;

/// Failure fetching one of the upstream feeds.
///
/// Any variant fails the whole report computation; partial data is never
/// returned and the core performs no retries. Malformed individual records
/// are not errors at this level, adapters recover them field by field.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Upstream returned HTTP {status}")]
    Status { status: u16 },
}

impl SourceError {
    /// Stable machine-distinguishable kind for boundary reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unavailable(_) => "UPSTREAM_UNAVAILABLE",
            SourceError::Timeout => "UPSTREAM_TIMEOUT",
            SourceError::Status { .. } => "UPSTREAM_STATUS",
        }
    }
}
