//! Ports - interfaces for the two upstream collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the aging engine and the outside world. Adapters implement these ports.
//!
//! - `PurchaseRequestSource` - snapshot of purchase requests (JSON feed)
//! - `WorkflowTaskSource` - snapshot of workflow tasks (XML feed)
//! - `SourceError` - upstream failure surfaced to the report boundary

mod purchase_request_source;
mod source_error;
mod workflow_task_source;

pub use purchase_request_source::PurchaseRequestSource;
pub use source_error::SourceError;
pub use workflow_task_source::WorkflowTaskSource;
