use uuid::Uuid;

use crate::model::vo::{FormAction, FormState};

pub type CampusResult<T> = Result<T, CampusException>;

#[derive(Debug, thiserror::Error)]
pub enum CampusException {
    #[error("There is no {kind} with id: {id}.")]
    RecordNotFound { kind: &'static str, id: Uuid },

    #[error("The form can't {action} while it is {state}.")]
    IllegalFormTransition { state: FormState, action: FormAction },

    #[error("The spreadsheet can't be read: {source}")]
    SpreadsheetUnreadable {
        #[source]
        source: std::io::Error,
    },

    #[error("The workbook can't be read: {reason}")]
    MalformedWorkbook { reason: String },

    #[error("Spreadsheet line {line} can't be parsed: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Election: {election_id} has no position with id: {position_id}.")]
    NoSuchPosition { election_id: Uuid, position_id: Uuid },

    #[error("Position: {position_id} has no candidate with id: {candidate_id}.")]
    NoSuchCandidate {
        position_id: Uuid,
        candidate_id: Uuid,
    },

    #[error("Campus internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

/// Campus errors that travelled through a repository come back unchanged,
/// anything else is internal.
impl From<anyhow::Error> for CampusException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<CampusException>() {
            Ok(e) => e,
            Err(e) => CampusException::InternalError { source: e },
        }
    }
}
