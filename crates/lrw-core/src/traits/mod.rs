pub mod converter;
pub mod session_store;

pub use converter::IEventConverter;
pub use session_store::IAcademicSessionStore;
