use std::path::PathBuf;

use domain_identity::model::{entity::Credential, vo::Role};
use getset::Getters;
use serde::Deserialize;

use super::telemetry::TelemetryConfig;

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct AppConfig {
    #[serde(default)]
    telemetry: TelemetryConfig,
    #[serde(default = "AppConfig::default_credentials")]
    credentials: Vec<Credential>,
    #[serde(default)]
    import: ImportConfig,
    #[serde(default)]
    session: SessionConfig,
    #[serde(default)]
    seeds: Vec<SeedConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            telemetry: Default::default(),
            credentials: Self::default_credentials(),
            import: Default::default(),
            session: Default::default(),
            seeds: Default::default(),
        }
    }
}

impl AppConfig {
    /// The demo accounts of the login screen.
    fn default_credentials() -> Vec<Credential> {
        vec![
            Credential::new("admin@college.edu", "admin123", Role::Admin),
            Credential::new("student@college.edu", "student123", Role::Student),
            Credential::new("teacher@college.edu", "teacher123", Role::TeachingStaff),
            Credential::new("staff@college.edu", "staff123", Role::NonTeachingStaff),
        ]
    }

    pub fn from_config(config: config::Config) -> anyhow::Result<Self> {
        Ok(config.try_deserialize()?)
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct ImportConfig {
    /// Column separator of imported spreadsheets, one ASCII character.
    #[serde(default = "ImportConfig::default_delimiter")]
    delimiter: char,
}

impl ImportConfig {
    fn default_delimiter() -> char {
        ','
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: Self::default_delimiter(),
        }
    }
}

/// Account logged in at startup when both fields are set.
#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct SessionConfig {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// Spreadsheet imported into one screen at startup.
#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct SeedConfig {
    kind: SeedKind,
    path: PathBuf,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SeedKind {
    Student,
    TeachingStaff,
    NonTeachingStaff,
    Facility,
    Event,
    Activity,
    Club,
    Election,
    Booking,
    Complaint,
}

pub fn build_config() -> anyhow::Result<config::Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix("CAMPUS")
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?)
}
