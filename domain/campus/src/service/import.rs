use async_trait::async_trait;

use crate::{command::SpreadsheetSource, exception::CampusResult, model::vo::Record};

/// Bulk import of records from a spreadsheet.
#[async_trait]
pub trait SpreadsheetImportService<T: Record>: Send + Sync {
    /// Parse every row first, then append all records in row order.
    ///
    /// On any read or parse error nothing is appended.
    async fn import(&self, source: SpreadsheetSource) -> CampusResult<Vec<T>>;
}

/// File picking collaborator, `None` when the user cancels.
#[async_trait]
pub trait DocumentPicker: Send + Sync {
    async fn pick_spreadsheet(&self) -> anyhow::Result<Option<SpreadsheetSource>>;
}
