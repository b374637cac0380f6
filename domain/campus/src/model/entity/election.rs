use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    exception::{CampusException, CampusResult},
    model::vo::{Derived, ElectionStatus, Record},
};

/// Student council election with its ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub positions: Vec<ElectionPosition>,
    pub status: ElectionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionPosition {
    pub id: Uuid,
    pub title: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub course: String,
    pub year: String,
    /// Portrait url.
    pub image: String,
    pub votes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElectionDraft {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateDraft {
    pub name: String,
    pub course: String,
    pub year: String,
    pub image: String,
}

/// A position with its candidates ordered by votes, most first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionStanding {
    pub position_id: Uuid,
    pub title: String,
    pub candidates: Vec<Candidate>,
}

impl Election {
    pub fn add_position(&mut self, title: String) -> Uuid {
        let id = Uuid::new_v4();
        self.positions.push(ElectionPosition {
            id,
            title,
            candidates: vec![],
        });
        id
    }

    pub fn position_mut(&mut self, position_id: Uuid) -> CampusResult<&mut ElectionPosition> {
        let election_id = self.id;
        self.positions.iter_mut().find(|p| p.id == position_id).ok_or(
            CampusException::NoSuchPosition {
                election_id,
                position_id,
            },
        )
    }

    pub fn nominate(&mut self, position_id: Uuid, draft: CandidateDraft) -> CampusResult<Uuid> {
        let position = self.position_mut(position_id)?;
        let id = Uuid::new_v4();
        position.candidates.push(Candidate {
            id,
            name: draft.name,
            course: draft.course,
            year: draft.year,
            image: draft.image,
            votes: 0,
        });
        Ok(id)
    }

    /// Count one vote, returns the candidate's new total.
    pub fn vote(&mut self, position_id: Uuid, candidate_id: Uuid) -> CampusResult<i64> {
        let position = self.position_mut(position_id)?;
        let candidate = position.candidates.iter_mut().find(|c| c.id == candidate_id).ok_or(
            CampusException::NoSuchCandidate {
                position_id,
                candidate_id,
            },
        )?;
        candidate.votes += 1;
        Ok(candidate.votes)
    }

    /// Ties keep nomination order.
    pub fn standings(&self) -> Vec<PositionStanding> {
        self.positions
            .iter()
            .map(|position| {
                let mut candidates = position.candidates.clone();
                candidates.sort_by(|a, b| b.votes.cmp(&a.votes));
                PositionStanding {
                    position_id: position.id,
                    title: position.title.clone(),
                    candidates,
                }
            })
            .collect()
    }
}

impl Record for Election {
    type Draft = ElectionDraft;
    const KIND: &'static str = "election";

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn from_draft(draft: ElectionDraft, derived: Derived) -> Self {
        Self {
            id: derived.id,
            title: draft.title,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            positions: vec![],
            status: ElectionStatus::default(),
        }
    }
}
