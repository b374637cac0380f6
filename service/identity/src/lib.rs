mod session;

pub use session::SessionServiceImpl;
