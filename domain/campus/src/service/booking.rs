use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::{BookingRequestDraft, Requester},
    exception::CampusResult,
    model::entity::{Booking, Facility},
};

#[async_trait]
pub trait BookingService: Send + Sync {
    /// Ask for the selected facility, the booking starts pending.
    async fn request(
        &self,
        facility: &Facility,
        requester: Requester,
        details: BookingRequestDraft,
    ) -> CampusResult<Booking>;

    async fn approve(&self, id: Uuid) -> CampusResult<Booking>;

    async fn reject(&self, id: Uuid) -> CampusResult<Booking>;
}
