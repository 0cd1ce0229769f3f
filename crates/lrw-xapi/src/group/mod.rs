//! Organizational group resolution.
//!
//! A statement's parent and grouping context activities are matched against
//! an ordered list of rules. The first rule whose predicate holds builds the
//! group; when none holds the event has no group.

mod reverse;
mod rules;

use lrw_core::models::{Activity, Organization, StatementContext, StatementExtensions};

pub use reverse::organization_to_context;
pub use rules::{grouping_organization, GROUP_RULES};

/// Borrowed view of the parts of a statement context the rules read.
#[derive(Debug, Clone, Copy)]
pub struct GroupContext<'a> {
    pub parents: &'a [Activity],
    pub groupings: &'a [Activity],
    pub extensions: &'a StatementExtensions,
}

impl<'a> GroupContext<'a> {
    pub fn new(context: &'a StatementContext) -> Self {
        let (parents, groupings) = match &context.context_activities {
            Some(activities) => (activities.parent.as_slice(), activities.grouping.as_slice()),
            None => (&[][..], &[][..]),
        };
        Self {
            parents,
            groupings,
            extensions: &context.extensions,
        }
    }

    /// The parent activity, when there is exactly one.
    pub fn single_parent(&self) -> Option<&'a Activity> {
        match self.parents {
            [parent] => Some(parent),
            _ => None,
        }
    }
}

/// A named predicate + builder pair.
#[derive(Clone, Copy)]
pub struct GroupRule {
    pub name: &'static str,
    pub applies: fn(&GroupContext<'_>) -> bool,
    pub build: fn(&GroupContext<'_>) -> Organization,
}

impl std::fmt::Debug for GroupRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupRule").field("name", &self.name).finish()
    }
}

/// Resolve the group of a statement context with the built-in rules.
pub fn resolve_group(context: &StatementContext) -> Option<Organization> {
    resolve_with(&GroupContext::new(context), &GROUP_RULES)
}

/// Resolve with an explicit rule list. First match wins.
pub fn resolve_with(context: &GroupContext<'_>, rules: &[GroupRule]) -> Option<Organization> {
    let rule = rules.iter().find(|rule| (rule.applies)(context))?;
    tracing::debug!(rule = rule.name, "group rule matched");
    Some((rule.build)(context))
}
