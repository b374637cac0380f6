use std::sync::Arc;

use async_trait::async_trait;
use domain_campus::{
    exception::{CampusException, CampusResult},
    model::vo::{Derived, Record, SearchQuery},
    repository::RecordRepository,
    service::{Clock, ListManagerService, RecordPatch},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::SystemClock;

/// List manager over one entity store.
#[derive(TypedBuilder)]
pub struct ListManagerImpl<T: Record> {
    repo: Arc<dyn RecordRepository<T>>,
    #[builder(default = Arc::new(SystemClock) as Arc<dyn Clock>)]
    clock: Arc<dyn Clock>,
}

impl<T: Record> ListManagerImpl<T> {
    async fn find(&self, id: Uuid) -> CampusResult<T> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(CampusException::RecordNotFound { kind: T::KIND, id })
    }
}

#[async_trait]
impl<T: Record> ListManagerService<T> for ListManagerImpl<T> {
    async fn submit(&self, draft: T::Draft) -> CampusResult<T> {
        let record = T::from_draft(draft, Derived::new(self.clock.now()));
        self.repo.insert(&record).await?;
        self.repo.save_changed().await?;
        tracing::debug!(kind = T::KIND, id = %record.id(), "Record submitted.");
        Ok(record)
    }

    async fn append_all(&self, drafts: Vec<T::Draft>) -> CampusResult<Vec<T>> {
        let now = self.clock.now();
        let records = drafts
            .into_iter()
            .map(|draft| T::from_draft(draft, Derived::new(now)))
            .collect::<Vec<_>>();
        if records.is_empty() {
            return Ok(records);
        }
        self.repo.insert_all(&records).await?;
        self.repo.save_changed().await?;
        tracing::debug!(kind = T::KIND, count = records.len(), "Records appended.");
        Ok(records)
    }

    async fn filter(&self, query: &str) -> CampusResult<Vec<T>> {
        let query = SearchQuery::new(query);
        let records = self.repo.get_all().await?;
        Ok(records.into_iter().filter(|record| record.matches(&query)).collect())
    }

    async fn get(&self, id: Uuid) -> CampusResult<T> {
        self.find(id).await
    }

    async fn update(&self, id: Uuid, patch: RecordPatch<T>) -> CampusResult<T> {
        let record = self
            .repo
            .update_with(id, Box::new(move |record: &mut T| Ok(patch(record)?)))
            .await?
            .ok_or(CampusException::RecordNotFound { kind: T::KIND, id })?;
        self.repo.save_changed().await?;
        tracing::debug!(kind = T::KIND, %id, "Record updated.");
        Ok(record)
    }

    async fn remove(&self, id: Uuid) -> CampusResult<T> {
        let removed = self
            .repo
            .delete_by_id(id)
            .await?
            .ok_or(CampusException::RecordNotFound { kind: T::KIND, id })?;
        self.repo.save_changed().await?;
        tracing::debug!(kind = T::KIND, %id, "Record removed.");
        Ok(removed)
    }
}
