//! # lrw-xapi
//!
//! Translates learning telemetry between xAPI statements and Caliper events.
//!
//! Vocabulary translation goes through bidirectional registries built once at
//! startup; unregistered verbs and activity types pass through unchanged.
//! Organizational context is reconstructed from parent/grouping activities
//! by an ordered list of group rules.

pub mod convert;
pub mod converter;
pub mod extensions;
pub mod group;
pub mod registry;
pub mod text;
pub mod timestamp;

pub use converter::XapiConverter;
pub use group::{resolve_group, GroupContext, GroupRule, GROUP_RULES};
pub use registry::Registries;
