use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{coerce_int, Derived, Record, ScheduleStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub organizer: String,
    pub capacity: i64,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub organizer: String,
    pub capacity: String,
}

impl Record for Event {
    type Draft = EventDraft;
    const KIND: &'static str = "event";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn from_draft(draft: EventDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            venue: draft.venue,
            organizer: draft.organizer,
            capacity: coerce_int(&draft.capacity),
            status: ScheduleStatus::default(),
        }
    }
}
