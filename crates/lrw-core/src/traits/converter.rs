use crate::errors::ConversionResult;
use crate::models::{Event, Statement};

/// Bidirectional statement <-> event translation.
///
/// Neither direction is a true inverse of the other; both are deliberately lossy.
pub trait IEventConverter: Send + Sync {
    /// Translate an xAPI statement into a Caliper event.
    fn to_event(&self, statement: &Statement) -> ConversionResult<Event>;

    /// Translate a Caliper event back into an xAPI statement.
    fn to_statement(&self, event: &Event) -> ConversionResult<Statement>;
}
