use async_trait::async_trait;
use domain_campus::{
    model::vo::Record,
    repository::{MutableRepository, ReadOnlyRepository, RecordMutation},
};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Entity store of one screen, kept in insertion order.
pub struct InMemoryRepo<T> {
    records: Mutex<Vec<T>>,
}

impl<T> Default for InMemoryRepo<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(vec![]),
        }
    }
}

impl<T> InMemoryRepo<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T: Record> ReadOnlyRepository<T> for InMemoryRepo<T> {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|x| x.id() == id).cloned())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        Ok(self.records.lock().await.clone())
    }
}

#[async_trait]
impl<T: Record> MutableRepository<T> for InMemoryRepo<T> {
    /// The lock is held while the mutation runs, so concurrent updates of one
    /// record never lose each other's changes.
    async fn update_with(
        &self,
        id: Uuid,
        mutation: RecordMutation<T>,
    ) -> anyhow::Result<Option<T>> {
        let mut records = self.records.lock().await;
        let Some(record) = records.iter_mut().find(|x| x.id() == id) else {
            return Ok(None);
        };
        let mut changed = record.clone();
        mutation(&mut changed)?;
        *record = changed.clone();
        Ok(Some(changed))
    }

    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid> {
        self.records.lock().await.push(entity.clone());
        Ok(entity.id())
    }

    async fn insert_all(&self, entities: &[T]) -> anyhow::Result<usize> {
        self.records.lock().await.extend_from_slice(entities);
        Ok(entities.len())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>> {
        let mut records = self.records.lock().await;
        Ok(records.iter().position(|x| x.id() == id).map(|index| records.remove(index)))
    }

    /// Nothing to commit.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}
