use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{coerce_int, ClubStatus, Derived, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub advisor: String,
    pub meeting_schedule: String,
    pub member_count: i64,
    pub status: ClubStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClubDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub advisor: String,
    pub meeting_schedule: String,
    pub member_count: String,
}

impl Record for Club {
    type Draft = ClubDraft;
    const KIND: &'static str = "club";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn from_draft(draft: ClubDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            advisor: draft.advisor,
            meeting_schedule: draft.meeting_schedule,
            member_count: coerce_int(&draft.member_count),
            status: ClubStatus::default(),
        }
    }
}
