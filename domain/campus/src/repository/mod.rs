//! Entity store contracts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::vo::Record;

/// Change applied to a stored record while the store is locked.
///
/// On error the stored record is left as it was.
pub type RecordMutation<T> = Box<dyn FnOnce(&mut T) -> anyhow::Result<()> + Send>;

/// Read side of an entity store.
#[async_trait]
pub trait ReadOnlyRepository<T: Record>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;
    /// All records in insertion order.
    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}

/// Write side of an entity store.
#[async_trait]
pub trait MutableRepository<T: Record>: Send + Sync {
    /// Apply `mutation` to the record with `id` in one store operation and
    /// return the changed record, `None` when there is no such record.
    async fn update_with(
        &self,
        id: Uuid,
        mutation: RecordMutation<T>,
    ) -> anyhow::Result<Option<T>>;
    /// Append one record.
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid>;
    /// Append records in order, all at once.
    async fn insert_all(&self, entities: &[T]) -> anyhow::Result<usize>;
    /// Returns the removed record, if any.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;
    /// Commit changes, stores without transactions just return `Ok(true)`.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}

/// Full entity store, implemented for everything with both sides.
pub trait RecordRepository<T: Record>: ReadOnlyRepository<T> + MutableRepository<T> {}

impl<T: Record, R: ReadOnlyRepository<T> + MutableRepository<T>> RecordRepository<T> for R {}
