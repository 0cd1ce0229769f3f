//! Object <-> entity mapping.

use lrw_core::constants::CALIPER_JSONLD_CONTEXT;
use lrw_core::errors::ConversionResult;
use lrw_core::models::{Activity, ActivityDefinition, Entity, EventExtensions};

use crate::extensions::{restore_extensions, stringify_extensions};
use crate::registry::Registries;
use crate::text::{resolve_localized, to_language_map};

pub fn activity_to_entity(activity: &Activity, registries: &Registries) -> Entity {
    let definition = activity.definition.as_ref();

    Entity {
        jsonld_context: Some(CALIPER_JSONLD_CONTEXT.to_string()),
        id: activity.id.clone(),
        type_: Some(registries.entity_type_for_activity_type(activity.definition_type())),
        name: definition.and_then(|d| resolve_localized(&d.name)),
        description: definition.and_then(|d| resolve_localized(&d.description)),
        extensions: definition
            .map(|d| stringify_extensions(&d.extensions))
            .unwrap_or_else(EventExtensions::new),
    }
}

/// Rebuild an activity. Names and descriptions come back as `en` only.
pub fn entity_to_activity(
    entity: &Entity,
    registries: &Registries,
    strict: bool,
) -> ConversionResult<Activity> {
    let definition = ActivityDefinition {
        type_: entity
            .type_
            .as_deref()
            .map(|t| registries.activity_type_for_entity_type(t)),
        name: to_language_map(entity.name.as_deref()),
        description: to_language_map(entity.description.as_deref()),
        extensions: restore_extensions(&entity.extensions, strict)?,
    };

    Ok(Activity {
        id: entity.id.clone(),
        definition: Some(definition),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrw_core::errors::ConversionError;
    use lrw_core::models::LanguageMap;
    use serde_json::json;

    fn registries() -> Registries {
        Registries::new().unwrap()
    }

    fn quiz(activity_type: Option<&str>) -> Activity {
        let mut name = LanguageMap::new();
        name.insert("en".into(), "Quiz".into());
        name.insert("fr".into(), "Questionnaire".into());
        let mut description = LanguageMap::new();
        description.insert("fr".into(), "Un questionnaire".into());
        let mut definition = ActivityDefinition {
            type_: activity_type.map(str::to_string),
            name,
            description,
            ..ActivityDefinition::default()
        };
        definition
            .extensions
            .insert("http://example.com/ext/level".into(), json!(3));
        Activity {
            id: Some("http://example.com/activities/quiz-1".into()),
            definition: Some(definition),
        }
    }

    #[test]
    fn registered_type_and_localized_text() {
        let entity = activity_to_entity(
            &quiz(Some("http://adlnet.gov/expapi/activities/course")),
            &registries(),
        );
        assert_eq!(entity.type_.as_deref(), Some("CourseSection"));
        assert_eq!(entity.name.as_deref(), Some("Quiz"));
        assert_eq!(entity.description.as_deref(), Some("Un questionnaire"));
        assert_eq!(entity.extensions["http://example.com/ext/level"], "3");
    }

    #[test]
    fn untyped_object_is_digital_resource() {
        let entity = activity_to_entity(&quiz(None), &registries());
        assert_eq!(entity.type_.as_deref(), Some("DigitalResource"));

        let bare = activity_to_entity(&Activity::with_id("x"), &registries());
        assert_eq!(bare.type_.as_deref(), Some("DigitalResource"));
        assert_eq!(bare.name, None);
        assert!(bare.extensions.is_empty());
    }

    #[test]
    fn unregistered_type_passes_through_both_ways() {
        let custom = "http://example.com/types/widget";
        let registries = registries();
        let entity = activity_to_entity(&quiz(Some(custom)), &registries);
        assert_eq!(entity.type_.as_deref(), Some(custom));
        let back = entity_to_activity(&entity, &registries, false).unwrap();
        assert_eq!(back.definition_type(), Some(custom));
    }

    #[test]
    fn reverse_wraps_text_as_english() {
        let registries = registries();
        let entity = activity_to_entity(
            &quiz(Some("http://activitystrea.ms/schema/1.0/page")),
            &registries,
        );
        let back = entity_to_activity(&entity, &registries, false).unwrap();
        let definition = back.definition.unwrap();
        assert_eq!(
            definition.type_.as_deref(),
            Some("http://activitystrea.ms/schema/1.0/page")
        );
        assert_eq!(definition.name.len(), 1);
        assert_eq!(definition.name["en"], "Quiz");
        assert_eq!(definition.description["en"], "Un questionnaire");
        assert_eq!(definition.extensions["http://example.com/ext/level"], json!("3"));
    }

    #[test]
    fn strict_reverse_rejects_malformed_key() {
        let mut entity = Entity {
            id: Some("x".into()),
            ..Entity::default()
        };
        entity.extensions.insert("not a uri".into(), "v".into());
        let err = entity_to_activity(&entity, &registries(), true).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedExtensionKey { .. }));

        let lenient = entity_to_activity(&entity, &registries(), false).unwrap();
        assert!(lenient.definition.unwrap().extensions.is_empty());
    }
}
