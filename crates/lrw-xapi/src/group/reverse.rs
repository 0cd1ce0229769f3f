use lrw_core::models::{Activity, ContextActivities, Organization, StatementContext};

/// Rebuild a statement context from an event group: a single grouping
/// activity carrying the group's id. Parents, sub-organizations and
/// extensions are not reconstructed.
pub fn organization_to_context(group: &Organization) -> StatementContext {
    StatementContext {
        context_activities: Some(ContextActivities {
            parent: Vec::new(),
            grouping: vec![Activity {
                id: group.id.clone(),
                definition: None,
            }],
        }),
        ..StatementContext::default()
    }
}
