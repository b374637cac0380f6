use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{deserialize_flag, ComplaintStatus, Derived, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: ComplaintStatus,
    /// Supporters.
    pub votes: i64,
    pub comments: i64,
    pub is_anonymous: bool,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_anonymous: bool,
}

impl Record for Complaint {
    type Draft = ComplaintDraft;
    const KIND: &'static str = "complaint";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn from_draft(draft: ComplaintDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            title: draft.title,
            description: draft.description,
            status: ComplaintStatus::default(),
            votes: 0,
            comments: 0,
            is_anonymous: draft.is_anonymous,
            date: derived.today(),
        }
    }
}
