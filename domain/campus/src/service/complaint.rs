use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::CampusResult,
    model::{entity::Complaint, vo::ComplaintStatus},
};

#[async_trait]
pub trait ComplaintService: Send + Sync {
    /// Add one supporter.
    async fn support(&self, id: Uuid) -> CampusResult<Complaint>;

    async fn set_status(&self, id: Uuid, status: ComplaintStatus) -> CampusResult<Complaint>;
}
