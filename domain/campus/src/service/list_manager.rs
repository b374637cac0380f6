use async_trait::async_trait;
use uuid::Uuid;

use crate::{exception::CampusResult, model::vo::Record};

/// In-place change applied by [`ListManagerService::update`]. An error
/// leaves the record untouched.
pub type RecordPatch<T> = Box<dyn FnOnce(&mut T) -> CampusResult<()> + Send>;

/// Generic list manager behind every entity screen.
#[async_trait]
pub trait ListManagerService<T: Record>: Send + Sync {
    /// Derive id and defaults from the draft, then append the record.
    async fn submit(&self, draft: T::Draft) -> CampusResult<T>;

    /// Same derivation as [`ListManagerService::submit`] for every draft,
    /// appended in order in one store operation.
    async fn append_all(&self, drafts: Vec<T::Draft>) -> CampusResult<Vec<T>>;

    /// Records whose search fields contain `query`, ignoring case, in
    /// insertion order. The empty query returns everything.
    async fn filter(&self, query: &str) -> CampusResult<Vec<T>>;

    async fn get(&self, id: Uuid) -> CampusResult<T>;

    /// Apply `patch` atomically with respect to other store operations.
    async fn update(&self, id: Uuid, patch: RecordPatch<T>) -> CampusResult<T>;

    async fn remove(&self, id: Uuid) -> CampusResult<T>;
}
