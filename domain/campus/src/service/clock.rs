use chrono::{DateTime, Utc};

/// Source of creation instants.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
