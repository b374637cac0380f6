use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{coerce_int, Derived, Record, ScheduleStatus};

/// Activity outside clubs and events: workshops, drives, trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub venue: String,
    pub coordinator: String,
    pub participants: i64,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub venue: String,
    pub coordinator: String,
    pub participants: String,
}

impl Record for Activity {
    type Draft = ActivityDraft;
    const KIND: &'static str = "activity";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn from_draft(draft: ActivityDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            date: draft.date,
            venue: draft.venue,
            coordinator: draft.coordinator,
            participants: coerce_int(&draft.participants),
            status: ScheduleStatus::default(),
        }
    }
}
