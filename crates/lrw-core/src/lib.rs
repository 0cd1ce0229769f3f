//! # lrw-core
//!
//! Foundation crate for the learning record warehouse.
//! Defines the xAPI statement and Caliper event models, the closed
//! vocabularies shared by both, errors, config, constants, and tracing.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LrwConfig;
pub use errors::{LrwError, LrwResult};
pub use models::{AcademicSession, Event, Statement};
