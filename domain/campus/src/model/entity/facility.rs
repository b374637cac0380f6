use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{coerce_int, Derived, FacilityStatus, Record};

/// Bookable place: hall, lab, ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: i64,
    pub location: String,
    pub description: String,
    pub status: FacilityStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: String,
    pub location: String,
    pub description: String,
}

impl Record for Facility {
    type Draft = FacilityDraft;
    const KIND: &'static str = "facility";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.as_str(), self.location.as_str()]
    }

    fn from_draft(draft: FacilityDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            name: draft.name,
            kind: draft.kind,
            capacity: coerce_int(&draft.capacity),
            location: draft.location,
            description: draft.description,
            status: FacilityStatus::default(),
        }
    }
}
