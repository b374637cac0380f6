mod authenticator;
pub mod config;
mod navigator;
mod picker;
mod repository;
pub mod telemetry;

#[rustfmt::skip]
pub use {
    authenticator::ConfiguredAuthenticator,
    config::{build_config, AppConfig},
    navigator::RouteHistory,
    picker::{NoPicker, PathPicker},
    repository::InMemoryRepo,
};
