use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::SearchQuery;

/// Values assigned when a record is created.
///
/// Form submission and bulk import both go through this, so an imported row
/// gets exactly the fields a submitted form would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub id: Uuid,
    pub now: DateTime<Utc>,
}

impl Derived {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            now,
        }
    }

    /// Creation date in UTC.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// A record held by a screen's entity store.
pub trait Record: Debug + Clone + Send + Sync + 'static {
    /// Unsaved form input. Missing fields deserialize to their defaults.
    type Draft: Debug + Clone + Default + DeserializeOwned + Send + Sync + 'static;

    /// Name used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Text fields the list filter looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn from_draft(draft: Self::Draft, derived: Derived) -> Self;

    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_any(self.search_fields())
    }
}
