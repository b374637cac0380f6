use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{BookingStatus, Derived, Record};

/// Facility booking request.
///
/// `facility_id` is copied as is, it may name a facility that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub facility_id: String,
    pub facility_name: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingDraft {
    pub facility_id: String,
    pub facility_name: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

impl Record for Booking {
    type Draft = BookingDraft;
    const KIND: &'static str = "booking";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.facility_name.as_str(), self.user_name.as_str()]
    }

    fn from_draft(draft: BookingDraft, derived: Derived) -> Self {
        let BookingDraft {
            facility_id,
            facility_name,
            user_id,
            user_name,
            user_role,
            date,
            start_time,
            end_time,
            purpose,
        } = draft;
        Self {
            id: derived.id,
            facility_id,
            facility_name,
            user_id,
            user_name,
            user_role,
            date,
            start_time,
            end_time,
            purpose,
            status: BookingStatus::default(),
            requested_at: derived.now,
        }
    }
}
