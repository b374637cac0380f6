use std::sync::Arc;

use async_trait::async_trait;
use domain_campus::{
    command::{BookingRequestDraft, Requester},
    exception::CampusResult,
    model::{
        entity::{Booking, BookingDraft, Facility},
        vo::{BookingStatus, Record},
    },
    service::{BookingService, ListManagerService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct BookingServiceImpl {
    bookings: Arc<dyn ListManagerService<Booking>>,
}

impl BookingServiceImpl {
    async fn review(&self, id: Uuid, status: BookingStatus) -> CampusResult<Booking> {
        let booking = self
            .bookings
            .update(
                id,
                Box::new(move |booking: &mut Booking| {
                    booking.status = status;
                    Ok(())
                }),
            )
            .await?;
        tracing::info!(%id, %status, facility = %booking.facility_name, "Booking reviewed.");
        Ok(booking)
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn request(
        &self,
        facility: &Facility,
        requester: Requester,
        details: BookingRequestDraft,
    ) -> CampusResult<Booking> {
        let draft = BookingDraft {
            facility_id: facility.id().to_string(),
            facility_name: facility.name.clone(),
            user_id: requester.user_id,
            user_name: requester.user_name,
            user_role: requester.user_role,
            date: details.date,
            start_time: details.start_time,
            end_time: details.end_time,
            purpose: details.purpose,
        };
        let booking = self.bookings.submit(draft).await?;
        tracing::info!(
            id = %booking.id,
            facility = %booking.facility_name,
            user = %booking.user_name,
            "Booking requested."
        );
        Ok(booking)
    }

    async fn approve(&self, id: Uuid) -> CampusResult<Booking> {
        self.review(id, BookingStatus::Approved).await
    }

    async fn reject(&self, id: Uuid) -> CampusResult<Booking> {
        self.review(id, BookingStatus::Rejected).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain_campus::{
        exception::CampusException,
        mock::MockBookingListManager,
        model::{entity::FacilityDraft, vo::Derived},
    };

    use super::*;

    fn hall() -> Facility {
        Facility::from_draft(
            FacilityDraft {
                name: "Main Auditorium".to_string(),
                kind: "Auditorium".to_string(),
                capacity: "500".to_string(),
                ..Default::default()
            },
            Derived::new(Utc::now()),
        )
    }

    fn pending() -> Booking {
        Booking::from_draft(
            BookingDraft {
                facility_name: "Main Auditorium".to_string(),
                user_name: "Asha".to_string(),
                date: "2024-03-20".to_string(),
                purpose: "Debate practice".to_string(),
                ..Default::default()
            },
            Derived::new(Utc::now()),
        )
    }

    #[tokio::test]
    async fn request_copies_facility_and_requester() {
        let facility = hall();
        let facility_id = facility.id.to_string();
        let mut bookings = MockBookingListManager::new();
        bookings
            .expect_submit()
            .times(1)
            .withf(move |draft: &BookingDraft| {
                draft.facility_id == facility_id
                    && draft.facility_name == "Main Auditorium"
                    && draft.user_role == "student"
                    && draft.start_time == "10:00"
            })
            .returning(|draft| Ok(Booking::from_draft(draft, Derived::new(Utc::now()))));
        let service = BookingServiceImpl::builder().bookings(Arc::new(bookings)).build();

        let booking = service
            .request(
                &facility,
                Requester {
                    user_id: "student@college.edu".to_string(),
                    user_name: "Asha".to_string(),
                    user_role: "student".to_string(),
                },
                BookingRequestDraft {
                    date: "2024-03-20".to_string(),
                    start_time: "10:00".to_string(),
                    end_time: "12:00".to_string(),
                    purpose: "Debate practice".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.user_name, "Asha");
    }

    #[tokio::test]
    async fn approve_changes_only_status() {
        let original = pending();
        let id = original.id;
        let stored = original.clone();
        let mut bookings = MockBookingListManager::new();
        bookings
            .expect_update()
            .times(1)
            .withf(move |got: &Uuid, _| *got == id)
            .returning(move |_, patch| {
                let mut booking = stored.clone();
                patch(&mut booking)?;
                Ok(booking)
            });
        let service = BookingServiceImpl::builder().bookings(Arc::new(bookings)).build();

        let approved = service.approve(id).await.unwrap();
        assert_eq!(approved.status, BookingStatus::Approved);
        assert_eq!(
            Booking {
                status: BookingStatus::Pending,
                ..approved
            },
            original
        );
    }

    #[tokio::test]
    async fn reject_unknown_booking() {
        let mut bookings = MockBookingListManager::new();
        bookings.expect_update().returning(|id, _| {
            Err(CampusException::RecordNotFound {
                kind: "booking",
                id,
            })
        });
        let service = BookingServiceImpl::builder().bookings(Arc::new(bookings)).build();

        assert!(matches!(
            service.reject(Uuid::new_v4()).await,
            Err(CampusException::RecordNotFound { .. })
        ));
    }
}
