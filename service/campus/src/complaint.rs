use std::sync::Arc;

use async_trait::async_trait;
use domain_campus::{
    exception::CampusResult,
    model::{entity::Complaint, vo::ComplaintStatus},
    service::{ComplaintService, ListManagerService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ComplaintServiceImpl {
    complaints: Arc<dyn ListManagerService<Complaint>>,
}

#[async_trait]
impl ComplaintService for ComplaintServiceImpl {
    async fn support(&self, id: Uuid) -> CampusResult<Complaint> {
        let complaint = self
            .complaints
            .update(
                id,
                Box::new(|complaint: &mut Complaint| {
                    complaint.votes += 1;
                    Ok(())
                }),
            )
            .await?;
        tracing::debug!(%id, votes = complaint.votes, "Complaint supported.");
        Ok(complaint)
    }

    async fn set_status(&self, id: Uuid, status: ComplaintStatus) -> CampusResult<Complaint> {
        let complaint = self
            .complaints
            .update(
                id,
                Box::new(move |complaint: &mut Complaint| {
                    complaint.status = status;
                    Ok(())
                }),
            )
            .await?;
        tracing::info!(%id, %status, "Complaint status changed.");
        Ok(complaint)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain_campus::{
        mock::MockComplaintListManager,
        model::{
            entity::ComplaintDraft,
            vo::{Derived, Record},
        },
    };

    use super::*;

    fn service(complaint: Complaint) -> ComplaintServiceImpl {
        let mut complaints = MockComplaintListManager::new();
        complaints.expect_update().times(1).returning(move |_, patch| {
            let mut stored = complaint.clone();
            patch(&mut stored)?;
            Ok(stored)
        });
        ComplaintServiceImpl::builder().complaints(Arc::new(complaints)).build()
    }

    fn broken_fan() -> Complaint {
        Complaint::from_draft(
            ComplaintDraft {
                title: "Broken fan".to_string(),
                description: "Room 12".to_string(),
                is_anonymous: true,
            },
            Derived::new(Utc::now()),
        )
    }

    #[tokio::test]
    async fn support_adds_one_vote() {
        let complaint = broken_fan();
        let id = complaint.id;
        let supported = service(complaint).support(id).await.unwrap();
        assert_eq!(supported.votes, 1);
        assert_eq!(supported.status, ComplaintStatus::Submitted);
    }

    #[tokio::test]
    async fn mark_under_review() {
        let complaint = broken_fan();
        let id = complaint.id;
        let reviewed = service(complaint)
            .set_status(id, ComplaintStatus::UnderReview)
            .await
            .unwrap();
        assert_eq!(reviewed.status.to_string(), "under review");
        assert_eq!(reviewed.votes, 0);
    }
}
