mod activity;
mod booking;
mod club;
mod complaint;
pub mod election;
mod event;
mod facility;
mod staff;
mod student;

#[rustfmt::skip]
pub use {
    activity::{Activity, ActivityDraft},
    booking::{Booking, BookingDraft},
    club::{Club, ClubDraft},
    complaint::{Complaint, ComplaintDraft},
    election::{Candidate, CandidateDraft, Election, ElectionDraft, ElectionPosition, PositionStanding},
    event::{Event, EventDraft},
    facility::{Facility, FacilityDraft},
    staff::{NonTeachingStaff, NonTeachingStaffDraft, TeachingStaff, TeachingStaffDraft},
    student::{Student, StudentDraft},
};
