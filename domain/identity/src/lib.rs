//! Roles, routes and the login contracts of the dashboards.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod service;
