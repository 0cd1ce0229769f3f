use lrw_core::constants::{
    CALIPER_JSONLD_CONTEXT, MOODLE_COURSE_EXTENSION, MOODLE_COURSE_ID, MOODLE_COURSE_TYPE,
    MOODLE_LOGSTORE_COURSE_ID, MOODLE_LOGSTORE_EXTENSION, SITE_PARENT_MARKER,
};
use lrw_core::models::{Activity, EntityType, Organization};
use serde_json::Value;

use super::{GroupContext, GroupRule};
use crate::extensions::{stringify_extensions, stringify_value};
use crate::text::resolve_localized;

/// Built-in rules in precedence order.
pub static GROUP_RULES: [GroupRule; 4] = [
    GroupRule {
        name: "site_parent",
        applies: site_parent_applies,
        build: site_parent_build,
    },
    GroupRule {
        name: "single_grouping",
        applies: single_grouping_applies,
        build: single_grouping_build,
    },
    GroupRule {
        name: "multi_grouping",
        applies: multi_grouping_applies,
        build: multi_grouping_build,
    },
    GroupRule {
        name: "parent_only",
        applies: parent_only_applies,
        build: parent_only_build,
    },
];

fn course_section() -> Option<String> {
    Some(EntityType::CourseSection.as_str().to_string())
}

fn organization(id: Option<String>, type_: Option<String>) -> Organization {
    Organization {
        jsonld_context: Some(CALIPER_JSONLD_CONTEXT.to_string()),
        id,
        type_,
        ..Organization::default()
    }
}

fn localized_name(activity: &Activity) -> Option<String> {
    activity
        .definition
        .as_ref()
        .and_then(|d| resolve_localized(&d.name))
}

fn localized_description(activity: &Activity) -> Option<String> {
    activity
        .definition
        .as_ref()
        .and_then(|d| resolve_localized(&d.description))
}

/// `map[key]` stringified, when `map` is a JSON object holding `key`.
fn nested_string(map: Option<&Value>, key: &str) -> Option<String> {
    map.and_then(Value::as_object)
        .and_then(|object| object.get(key))
        .filter(|value| !value.is_null())
        .map(stringify_value)
}

// site_parent

fn site_parent_applies(context: &GroupContext<'_>) -> bool {
    context
        .single_parent()
        .and_then(|parent| parent.id.as_deref())
        .is_some_and(|id| id.contains(SITE_PARENT_MARKER))
}

fn site_parent_build(context: &GroupContext<'_>) -> Organization {
    let site_id = context
        .single_parent()
        .and_then(|parent| parent.id.as_deref())
        .and_then(|id| id.rsplit('/').next())
        .map(str::to_string);
    organization(site_id, course_section())
}

// single_grouping

fn single_grouping_applies(context: &GroupContext<'_>) -> bool {
    context.groupings.len() == 1
}

fn single_grouping_build(context: &GroupContext<'_>) -> Organization {
    let Some(grouping) = context.groupings.first() else {
        return organization(None, None);
    };
    let log_row = context
        .extensions
        .get(MOODLE_LOGSTORE_EXTENSION)
        .filter(|value| value.is_object());
    let (id, type_) = match log_row {
        Some(row) => (
            nested_string(Some(row), MOODLE_LOGSTORE_COURSE_ID),
            course_section(),
        ),
        None => (None, None),
    };
    grouping_organization(context, grouping, id, type_)
}

// multi_grouping

fn multi_grouping_applies(context: &GroupContext<'_>) -> bool {
    context.groupings.len() > 1
}

fn multi_grouping_build(context: &GroupContext<'_>) -> Organization {
    let course = context
        .groupings
        .iter()
        .find(|grouping| grouping.definition_type() == Some(MOODLE_COURSE_TYPE));

    match course {
        Some(grouping) => {
            let id = nested_string(
                grouping
                    .definition
                    .as_ref()
                    .and_then(|d| d.extensions.get(MOODLE_COURSE_EXTENSION)),
                MOODLE_COURSE_ID,
            );
            grouping_organization(context, grouping, id, course_section())
        }
        // No course grouping: the scan ends on the last grouping.
        None => match context.groupings.last() {
            Some(last) => grouping_organization(context, last, None, None),
            None => organization(None, None),
        },
    }
}

/// Organization for a selected grouping activity. Extracted values win over
/// the grouping's own id and definition type. A single parent becomes the
/// enclosing organization.
pub fn grouping_organization(
    context: &GroupContext<'_>,
    grouping: &Activity,
    id: Option<String>,
    type_: Option<String>,
) -> Organization {
    let sub_organization_of = context.single_parent().map(|parent| {
        Box::new(Organization {
            name: localized_name(parent),
            description: localized_description(parent),
            ..organization(
                parent.id.clone(),
                Some(
                    parent
                        .definition_type()
                        .unwrap_or(EntityType::CourseOffering.as_str())
                        .to_string(),
                ),
            )
        })
    });

    Organization {
        name: localized_name(grouping),
        description: localized_description(grouping),
        extensions: stringify_extensions(context.extensions),
        sub_organization_of,
        ..organization(
            id.or_else(|| grouping.id.clone()),
            type_.or_else(|| grouping.definition_type().map(str::to_string)),
        )
    }
}

// parent_only

fn parent_only_applies(context: &GroupContext<'_>) -> bool {
    context.groupings.is_empty() && context.single_parent().is_some()
}

fn parent_only_build(context: &GroupContext<'_>) -> Organization {
    let Some(parent) = context.single_parent() else {
        return organization(None, None);
    };
    Organization {
        name: localized_name(parent),
        description: localized_description(parent),
        extensions: stringify_extensions(context.extensions),
        ..organization(
            parent.id.clone(),
            parent.definition_type().map(str::to_string),
        )
    }
}
