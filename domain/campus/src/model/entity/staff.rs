use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Derived, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingStaff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Professor, lecturer, ...
    pub designation: String,
    pub qualification: String,
    pub joining_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeachingStaffDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub qualification: String,
}

impl Record for TeachingStaff {
    type Draft = TeachingStaffDraft;
    const KIND: &'static str = "teaching staff";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.designation.as_str()]
    }

    fn from_draft(draft: TeachingStaffDraft, derived: Derived) -> Self {
        let TeachingStaffDraft {
            name,
            email,
            phone,
            department,
            designation,
            qualification,
        } = draft;
        Self {
            id: derived.id,
            name,
            email,
            phone,
            department,
            designation,
            qualification,
            joining_date: derived.today(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonTeachingStaff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Librarian, lab assistant, ...
    pub role: String,
    pub shift: String,
    pub joining_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonTeachingStaffDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub shift: String,
}

impl Record for NonTeachingStaff {
    type Draft = NonTeachingStaffDraft;
    const KIND: &'static str = "non-teaching staff";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }

    fn from_draft(draft: NonTeachingStaffDraft, derived: Derived) -> Self {
        let NonTeachingStaffDraft {
            name,
            email,
            phone,
            department,
            role,
            shift,
        } = draft;
        Self {
            id: derived.id,
            name,
            email,
            phone,
            department,
            role,
            shift,
            joining_date: derived.today(),
        }
    }
}
