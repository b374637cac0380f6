mod screen;

use std::sync::Arc;

use anyhow::Context;
use domain_campus::{
    model::entity::{
        Activity, Booking, Club, Complaint, Election, Event, Facility, NonTeachingStaff, Student,
        TeachingStaff,
    },
    service::{BookingService, ComplaintService, DocumentPicker, ElectionService},
};
use domain_identity::service::SessionService;
use service_campus::{BookingServiceImpl, ComplaintServiceImpl, ElectionServiceImpl};
use service_identity::SessionServiceImpl;

use crate::infrastructure::{
    config::{SeedConfig, SeedKind},
    AppConfig, ConfiguredAuthenticator, PathPicker, RouteHistory,
};

pub use screen::ListScreen;

/// Every screen of the app with the services behind them.
pub struct Dashboards {
    pub students: ListScreen<Student>,
    pub teaching_staff: ListScreen<TeachingStaff>,
    pub non_teaching_staff: ListScreen<NonTeachingStaff>,
    pub facilities: ListScreen<Facility>,
    pub bookings: ListScreen<Booking>,
    pub events: ListScreen<Event>,
    pub activities: ListScreen<Activity>,
    pub clubs: ListScreen<Club>,
    pub elections: ListScreen<Election>,
    pub complaints: ListScreen<Complaint>,
    pub booking_service: Arc<dyn BookingService>,
    pub election_service: Arc<dyn ElectionService>,
    pub complaint_service: Arc<dyn ComplaintService>,
    pub session: Arc<dyn SessionService>,
    pub history: Arc<RouteHistory>,
}

impl Dashboards {
    pub fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let delimiter = *config.import().delimiter();
        anyhow::ensure!(
            delimiter.is_ascii(),
            "The import delimiter must be one ASCII character, got: {delimiter:?}."
        );
        let delimiter = u8::try_from(delimiter).context("Cannot use the import delimiter")?;

        let bookings = ListScreen::<Booking>::in_memory(delimiter);
        let elections = ListScreen::<Election>::in_memory(delimiter);
        let complaints = ListScreen::<Complaint>::in_memory(delimiter);
        let history = Arc::new(RouteHistory::new());
        let session = SessionServiceImpl::builder()
            .authenticator(Arc::new(ConfiguredAuthenticator::new(
                config.credentials().clone(),
            )))
            .navigator(history.clone())
            .build();
        Ok(Self {
            students: ListScreen::in_memory(delimiter),
            teaching_staff: ListScreen::in_memory(delimiter),
            non_teaching_staff: ListScreen::in_memory(delimiter),
            facilities: ListScreen::in_memory(delimiter),
            events: ListScreen::in_memory(delimiter),
            activities: ListScreen::in_memory(delimiter),
            clubs: ListScreen::in_memory(delimiter),
            booking_service: Arc::new(
                BookingServiceImpl::builder().bookings(bookings.manager()).build(),
            ),
            election_service: Arc::new(
                ElectionServiceImpl::builder().elections(elections.manager()).build(),
            ),
            complaint_service: Arc::new(
                ComplaintServiceImpl::builder().complaints(complaints.manager()).build(),
            ),
            bookings,
            elections,
            complaints,
            session: Arc::new(session),
            history,
        })
    }

    /// Import one spreadsheet into the screen of its kind.
    pub async fn import(&self, kind: SeedKind, picker: &dyn DocumentPicker) -> usize {
        match kind {
            SeedKind::Student => self.students.import_spreadsheet(picker).await,
            SeedKind::TeachingStaff => self.teaching_staff.import_spreadsheet(picker).await,
            SeedKind::NonTeachingStaff => self.non_teaching_staff.import_spreadsheet(picker).await,
            SeedKind::Facility => self.facilities.import_spreadsheet(picker).await,
            SeedKind::Event => self.events.import_spreadsheet(picker).await,
            SeedKind::Activity => self.activities.import_spreadsheet(picker).await,
            SeedKind::Club => self.clubs.import_spreadsheet(picker).await,
            SeedKind::Election => self.elections.import_spreadsheet(picker).await,
            SeedKind::Booking => self.bookings.import_spreadsheet(picker).await,
            SeedKind::Complaint => self.complaints.import_spreadsheet(picker).await,
        }
    }

    /// Run the configured seed imports in order, returning the total.
    pub async fn seed(&self, seeds: &[SeedConfig]) -> usize {
        let mut total = 0;
        for seed in seeds {
            let count = self.import(*seed.kind(), &PathPicker::new(seed.path())).await;
            tracing::info!(kind = ?seed.kind(), path = %seed.path().display(), count, "Seeded.");
            total += count;
        }
        total
    }
}
