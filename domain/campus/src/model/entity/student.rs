use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Derived, Record};

/// Enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub roll_number: String,
    pub year: String,
    /// Date the record was created.
    pub admission_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub roll_number: String,
    pub year: String,
}

impl Record for Student {
    type Draft = StudentDraft;
    const KIND: &'static str = "student";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.roll_number.as_str(), self.department.as_str()]
    }

    fn from_draft(draft: StudentDraft, derived: Derived) -> Self {
        let StudentDraft {
            name,
            email,
            phone,
            department,
            roll_number,
            year,
        } = draft;
        Self {
            id: derived.id,
            name,
            email,
            phone,
            department,
            roll_number,
            year,
            admission_date: derived.today(),
        }
    }
}
