use std::sync::Arc;

use async_trait::async_trait;
use domain_campus::{
    exception::CampusResult,
    model::entity::{CandidateDraft, Election, PositionStanding},
    service::{ElectionService, ListManagerService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ElectionServiceImpl {
    elections: Arc<dyn ListManagerService<Election>>,
}

impl ElectionServiceImpl {
    /// Applies a ballot change to the stored election in one store operation.
    /// A failed change leaves the election as it was.
    async fn change<F, R>(&self, election_id: Uuid, f: F) -> CampusResult<Election>
    where
        F: FnOnce(&mut Election) -> CampusResult<R> + Send + 'static,
        R: 'static,
    {
        self.elections
            .update(election_id, Box::new(move |election: &mut Election| f(election).map(drop)))
            .await
    }
}

#[async_trait]
impl ElectionService for ElectionServiceImpl {
    async fn add_position(&self, election_id: Uuid, title: String) -> CampusResult<Election> {
        let election = self
            .change(election_id, move |election| Ok(election.add_position(title)))
            .await?;
        tracing::debug!(%election_id, "Position added.");
        Ok(election)
    }

    async fn nominate(
        &self,
        election_id: Uuid,
        position_id: Uuid,
        candidate: CandidateDraft,
    ) -> CampusResult<Election> {
        let election = self
            .change(election_id, move |election| election.nominate(position_id, candidate))
            .await?;
        tracing::debug!(%election_id, %position_id, "Candidate nominated.");
        Ok(election)
    }

    async fn vote(
        &self,
        election_id: Uuid,
        position_id: Uuid,
        candidate_id: Uuid,
    ) -> CampusResult<Election> {
        let election = self
            .change(election_id, move |election| election.vote(position_id, candidate_id))
            .await?;
        tracing::info!(%election_id, %position_id, %candidate_id, "Vote counted.");
        Ok(election)
    }

    async fn standings(&self, election_id: Uuid) -> CampusResult<Vec<PositionStanding>> {
        Ok(self.elections.get(election_id).await?.standings())
    }
}
