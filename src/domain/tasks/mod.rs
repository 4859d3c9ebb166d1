//! Task and purchase-request models, the workspace index, and the
//! lifecycle-status deriver.

mod index;
mod model;
mod status;

pub use index::TaskIndex;
pub use model::{PurchaseRequest, WorkflowTask};
pub use status::{matches_workflow_pattern, StatusDeriver};
