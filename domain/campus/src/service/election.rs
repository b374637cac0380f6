use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::CampusResult,
    model::entity::{CandidateDraft, Election, PositionStanding},
};

/// Ballot management of elections.
#[async_trait]
pub trait ElectionService: Send + Sync {
    async fn add_position(&self, election_id: Uuid, title: String) -> CampusResult<Election>;

    async fn nominate(
        &self,
        election_id: Uuid,
        position_id: Uuid,
        candidate: CandidateDraft,
    ) -> CampusResult<Election>;

    async fn vote(
        &self,
        election_id: Uuid,
        position_id: Uuid,
        candidate_id: Uuid,
    ) -> CampusResult<Election>;

    async fn standings(&self, election_id: Uuid) -> CampusResult<Vec<PositionStanding>>;
}
