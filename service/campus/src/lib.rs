mod booking;
mod clock;
mod complaint;
mod election;
mod import;
mod list_manager;

#[rustfmt::skip]
pub use {
    booking::BookingServiceImpl,
    clock::SystemClock,
    complaint::ComplaintServiceImpl,
    election::ElectionServiceImpl,
    import::SpreadsheetImportServiceImpl,
    list_manager::ListManagerImpl,
};
