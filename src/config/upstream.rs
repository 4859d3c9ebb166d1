//! Upstream feed configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Upstream procurement provider configuration.
///
/// Both feed URLs are required; there is no sensible default for a
/// customer-specific Mendix deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// JSON purchase-request feed URL
    pub requests_url: String,

    /// XML workflow-task feed URL
    pub tasks_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept self-signed upstream certificates. Development only.
    #[serde(default)]
    pub danger_accept_invalid_certs: bool,
}

impl UpstreamConfig {
    /// Validate upstream configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        validate_url(&self.requests_url, "upstream.requests_url")?;
        validate_url(&self.tasks_url, "upstream.tasks_url")?;
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.danger_accept_invalid_certs && *environment == Environment::Production {
            return Err(ValidationError::InsecureTlsInProduction);
        }
        Ok(())
    }
}

fn validate_url(url: &str, field: &'static str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::MissingRequired(field));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUpstreamUrl(field));
    }
    Ok(())
}

fn default_timeout_secs() -> u64 {
    30
}
