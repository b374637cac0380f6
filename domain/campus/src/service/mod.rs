mod booking;
mod clock;
mod complaint;
mod election;
mod import;
mod list_manager;

#[rustfmt::skip]
pub use {
    booking::BookingService,
    clock::Clock,
    complaint::ComplaintService,
    election::ElectionService,
    import::{DocumentPicker, SpreadsheetImportService},
    list_manager::{ListManagerService, RecordPatch},
};
