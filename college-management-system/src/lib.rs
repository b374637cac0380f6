//! Dashboards of the college management app wired to in-memory stores.

pub mod dashboard;
pub mod infrastructure;
