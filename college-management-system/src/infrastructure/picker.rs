use std::path::PathBuf;

use async_trait::async_trait;
use domain_campus::{command::SpreadsheetSource, service::DocumentPicker};

/// Picks a fixed file, used for configured seed imports.
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentPicker for PathPicker {
    async fn pick_spreadsheet(&self) -> anyhow::Result<Option<SpreadsheetSource>> {
        Ok(Some(SpreadsheetSource::Path(self.path.clone())))
    }
}

/// Always cancelled.
pub struct NoPicker;

#[async_trait]
impl DocumentPicker for NoPicker {
    async fn pick_spreadsheet(&self) -> anyhow::Result<Option<SpreadsheetSource>> {
        Ok(None)
    }
}
