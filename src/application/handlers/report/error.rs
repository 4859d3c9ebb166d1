//! Report-level error type.

use thiserror::Error;

use crate::ports::SourceError;

/// Failure of a whole report computation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Either upstream fetch failed; no partial result is produced.
    #[error(transparent)]
    Upstream(#[from] SourceError),

    /// The caller omitted a required parameter; the aggregation is never
    /// attempted.
    #[error("Missing required parameter '{name}'")]
    MissingParameter { name: &'static str },
}

impl ReportError {
    /// Stable machine-distinguishable kind for the HTTP boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::Upstream(source) => source.kind(),
            ReportError::MissingParameter { .. } => "MISSING_PARAMETER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_kind_passes_through() {
        let err = ReportError::from(SourceError::Timeout);
        assert_eq!(err.kind(), "UPSTREAM_TIMEOUT");
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let err = ReportError::MissingParameter { name: "ws" };
        assert_eq!(err.kind(), "MISSING_PARAMETER");
        assert_eq!(err.to_string(), "Missing required parameter 'ws'");
    }
}
