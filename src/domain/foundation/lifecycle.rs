//! Lifecycle status of a purchase request.

use serde::Serialize;

use super::normalize::normalize;

/// Derived lifecycle state of a purchase request.
///
/// Computed fresh from the request's workflow-relevant tasks on every
/// report pass; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleStatus {
    NotStarted,
    InProgress,
    Waiting,
    Completed,
}

impl LifecycleStatus {
    /// Human-readable label used in report rows.
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStatus::NotStarted => "Não iniciado",
            LifecycleStatus::InProgress => "Em execução",
            LifecycleStatus::Waiting => "Aguardando",
            LifecycleStatus::Completed => "Concluído",
        }
    }

    /// Recognizes a caller-supplied free-text status filter.
    ///
    /// Callers send loose keywords rather than exact variants ("exec",
    /// "em execução", "in progress"), so matching is by substring over the
    /// normalized text. Unrecognized text yields `None`.
    pub fn from_filter(text: &str) -> Option<Self> {
        let norm = normalize(text);
        if norm.is_empty() {
            return None;
        }
        if norm.contains("exec") || norm.contains("progress") || norm.contains("andamento") {
            return Some(LifecycleStatus::InProgress);
        }
        if norm.contains("nao inici") || norm.contains("not start") {
            return Some(LifecycleStatus::NotStarted);
        }
        if norm.contains("conclu") || norm.contains("complet") || norm.contains("finaliz") {
            return Some(LifecycleStatus::Completed);
        }
        if norm.contains("aguard") || norm.contains("wait") || norm.contains("espera") {
            return Some(LifecycleStatus::Waiting);
        }
        None
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_recognizes_loose_keywords() {
        assert_eq!(LifecycleStatus::from_filter("exec"), Some(LifecycleStatus::InProgress));
        assert_eq!(LifecycleStatus::from_filter("Em Execução"), Some(LifecycleStatus::InProgress));
        assert_eq!(LifecycleStatus::from_filter("in progress"), Some(LifecycleStatus::InProgress));
        assert_eq!(LifecycleStatus::from_filter("não iniciado"), Some(LifecycleStatus::NotStarted));
        assert_eq!(LifecycleStatus::from_filter("CONCLUÍDO"), Some(LifecycleStatus::Completed));
        assert_eq!(LifecycleStatus::from_filter("aguardando"), Some(LifecycleStatus::Waiting));
        assert_eq!(LifecycleStatus::from_filter("waiting"), Some(LifecycleStatus::Waiting));
    }

    #[test]
    fn unknown_filter_yields_none() {
        assert_eq!(LifecycleStatus::from_filter(""), None);
        assert_eq!(LifecycleStatus::from_filter("banana"), None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&LifecycleStatus::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
    }
}
