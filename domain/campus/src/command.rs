use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where a bulk import reads its spreadsheet from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetSource {
    /// File on disk, read asynchronously.
    Path(PathBuf),
    /// Already loaded file content.
    Bytes(Vec<u8>),
}

/// Who asks for a facility booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    pub user_id: String,
    pub user_name: String,
    pub user_role: String,
}

/// Booking form filled in after selecting a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingRequestDraft {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}
