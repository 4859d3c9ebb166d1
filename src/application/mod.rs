//! Application layer - query orchestration between HTTP and domain.

pub mod handlers;
