//! Static classification tables: workflow categories and title aliases.
//!
//! Both tables are immutable configuration constructed at startup and
//! shared read-only across concurrent report computations.

mod alias;
mod category;

pub use alias::AliasTable;
pub use category::{Category, CategoryCatalog, WorkflowStep};
