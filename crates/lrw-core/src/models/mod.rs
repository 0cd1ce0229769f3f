//! Data models: xAPI statements, Caliper events, OneRoster academic sessions,
//! and the closed vocabularies that bridge statements and events.

pub mod academic_session;
pub mod event;
pub mod statement;
pub mod vocabulary;

pub use academic_session::{AcademicSession, AcademicSessionType, RecordStatus};
pub use event::{Agent, Entity, Event, EventExtensions, Organization, ResultEntity};
pub use statement::{
    Account, Activity, ActivityDefinition, Actor, ContextActivities, LanguageMap, Score,
    Statement, StatementContext, StatementExtensions, StatementResult, Verb,
};
pub use vocabulary::{Action, AgentKind, EntityType, EventType};
