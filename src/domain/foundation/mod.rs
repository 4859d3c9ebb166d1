//! Foundation module - shared domain primitives.
//!
//! Text canonicalization, the business-day calendar and the lifecycle
//! status vocabulary used across the classification and aging engine.

mod business_days;
mod lifecycle;
mod normalize;

pub use business_days::{
    business_days_at_least_one, business_days_between, is_business_day, CountPolicy,
};
pub use lifecycle::LifecycleStatus;
pub use normalize::{normalize, normalize_opt};
