mod flag;
mod form;
mod numeric;
mod record;
mod search;
mod status;

#[rustfmt::skip]
pub use {
    flag::deserialize_flag,
    form::{FormAction, FormSession, FormState},
    numeric::coerce_int,
    record::{Derived, Record},
    search::SearchQuery,
    status::{
        BookingStatus, ClubStatus, ComplaintStatus, ElectionStatus, FacilityStatus,
        ScheduleStatus,
    },
};
