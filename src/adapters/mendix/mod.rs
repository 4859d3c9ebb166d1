//! Mendix upstream adapters.
//!
//! Implementations of the two source ports against the procurement
//! provider: a JSON purchase-request endpoint with a provider-specific
//! wrapper shape, and an XML task feed serialized as repeated
//! `TasksList_Json` blocks.

mod request_client;
mod task_client;

pub use request_client::MendixRequestClient;
pub use task_client::{parse_tasks_xml, MendixTaskClient};

use crate::ports::SourceError;

/// Maps a transport failure onto the port error vocabulary.
pub(crate) fn map_transport_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Unavailable(err.to_string())
    }
}

/// Rejects non-success responses before any body handling.
pub(crate) fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response)
}
