use crate::{
    command::SpreadsheetSource,
    exception::CampusResult,
    model::entity::*,
    repository::{MutableRepository, ReadOnlyRepository, RecordMutation},
    service::{Clock, DocumentPicker, ListManagerService, RecordPatch},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

/// Mocks the entity store and the list manager of one record type.
macro_rules! mock_record {
    ($repo:ident, $manager:ident, $record:ident, $draft:ident) => {
        mock! {
            pub $repo {}
            #[async_trait]
            impl ReadOnlyRepository<$record> for $repo {
                async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<$record>>;
                async fn get_all(&self) -> anyhow::Result<Vec<$record>>;
            }
            #[async_trait]
            impl MutableRepository<$record> for $repo {
                async fn update_with(
                    &self,
                    id: Uuid,
                    mutation: RecordMutation<$record>,
                ) -> anyhow::Result<Option<$record>>;
                async fn insert(&self, entity: &$record) -> anyhow::Result<Uuid>;
                async fn insert_all(&self, entities: &[$record]) -> anyhow::Result<usize>;
                async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<$record>>;
                async fn save_changed(&self) -> anyhow::Result<bool>;
            }
        }

        mock! {
            pub $manager {}
            #[async_trait]
            impl ListManagerService<$record> for $manager {
                async fn submit(&self, draft: $draft) -> CampusResult<$record>;
                async fn append_all(&self, drafts: Vec<$draft>) -> CampusResult<Vec<$record>>;
                async fn filter(&self, query: &str) -> CampusResult<Vec<$record>>;
                async fn get(&self, id: Uuid) -> CampusResult<$record>;
                async fn update(&self, id: Uuid, patch: RecordPatch<$record>) -> CampusResult<$record>;
                async fn remove(&self, id: Uuid) -> CampusResult<$record>;
            }
        }
    };
}

mock_record!(StudentRepo, StudentListManager, Student, StudentDraft);
mock_record!(TeachingStaffRepo, TeachingStaffListManager, TeachingStaff, TeachingStaffDraft);
mock_record!(
    NonTeachingStaffRepo,
    NonTeachingStaffListManager,
    NonTeachingStaff,
    NonTeachingStaffDraft
);
mock_record!(FacilityRepo, FacilityListManager, Facility, FacilityDraft);
mock_record!(EventRepo, EventListManager, Event, EventDraft);
mock_record!(ActivityRepo, ActivityListManager, Activity, ActivityDraft);
mock_record!(ClubRepo, ClubListManager, Club, ClubDraft);
mock_record!(ElectionRepo, ElectionListManager, Election, ElectionDraft);
mock_record!(BookingRepo, BookingListManager, Booking, BookingDraft);
mock_record!(ComplaintRepo, ComplaintListManager, Complaint, ComplaintDraft);

mock! {
    pub Clock {}
    impl Clock for Clock {
        fn now(&self) -> DateTime<Utc>;
    }
}

mock! {
    pub DocumentPicker {}
    #[async_trait]
    impl DocumentPicker for DocumentPicker {
        async fn pick_spreadsheet(&self) -> anyhow::Result<Option<SpreadsheetSource>>;
    }
}
