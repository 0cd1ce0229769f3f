//! # lrw-session
//!
//! Academic session storage for the warehouse: an idempotent key-value store
//! keyed by (tenant, org, sourced id) with last-write-wins updates.

pub mod store;

pub use store::{InMemoryAcademicSessionStore, SessionKey, StoredSession};
