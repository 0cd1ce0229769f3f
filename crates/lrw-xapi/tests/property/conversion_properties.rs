use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use lrw_core::constants::DEFAULT_XAPI_VERB;
use lrw_core::models::{Action, EntityType, LanguageMap};
use lrw_xapi::extensions::{is_valid_extension_key, stringify_value};
use lrw_xapi::registry::verbs::VERB_ACTIONS;
use lrw_xapi::text::resolve_localized;
use lrw_xapi::timestamp::parse_timestamp;
use lrw_xapi::Registries;
use proptest::prelude::*;

fn registries() -> Registries {
    Registries::new().unwrap()
}

// ── Registry bijection ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn registered_actions_survive_verb_round_trip(
        index in 0..VERB_ACTIONS.len()
    ) {
        let (action, _) = VERB_ACTIONS[index];
        let r = registries();
        let verb = r.verb_for_action(action.as_str());
        prop_assert_eq!(r.action_for_verb(verb), action.as_str());
    }

    #[test]
    fn registered_entity_types_survive_round_trip(
        entity_type in proptest::sample::select(EntityType::ALL.to_vec())
    ) {
        let r = registries();
        let activity_type = r.activity_type_for_entity_type(entity_type.as_str());
        prop_assert_eq!(
            r.entity_type_for_activity_type(Some(activity_type.as_str())),
            entity_type.as_str()
        );
    }
}

// ── Unmapped passthrough ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn unregistered_verb_passes_through_and_falls_back(
        path in "[a-z]{1,12}"
    ) {
        let verb = format!("http://example.com/unregistered/{path}");
        let r = registries();
        let action = r.action_for_verb(&verb);
        prop_assert_eq!(&action, &verb);
        prop_assert!(Action::parse(&action).is_none());
        prop_assert_eq!(r.verb_for_action(&action), DEFAULT_XAPI_VERB);
    }

    #[test]
    fn unregistered_activity_type_passes_through_both_ways(
        path in "[a-z]{1,12}"
    ) {
        let activity_type = format!("http://example.com/types/{path}");
        let r = registries();
        let entity_type = r.entity_type_for_activity_type(Some(activity_type.as_str()));
        prop_assert_eq!(&entity_type, &activity_type);
        prop_assert_eq!(r.activity_type_for_entity_type(&entity_type), activity_type);
    }
}

// ── Locale resolution ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_entry_resolves_whatever_its_tag(
        tag in "[a-z]{2}(-[A-Z]{2})?",
        text in "[A-Za-z ]{1,20}"
    ) {
        let mut map = LanguageMap::new();
        map.insert(tag, text.clone());
        prop_assert_eq!(resolve_localized(&map), Some(text));
    }

    #[test]
    fn several_entries_resolve_only_to_english(
        tags in proptest::collection::btree_set("[a-d][a-z]", 2..5),
        with_english in any::<bool>()
    ) {
        let mut map: LanguageMap = tags
            .into_iter()
            .map(|tag| (tag.clone(), format!("text-{tag}")))
            .collect();
        if with_english {
            map.insert("en".into(), "english".into());
        }
        let expected = with_english.then(|| "english".to_string());
        prop_assert_eq!(resolve_localized(&map), expected);
    }
}

// ── Timestamps ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn offset_timestamps_normalize_to_the_same_instant(
        seconds in 0i64..4_102_444_800,
        offset_minutes in -12 * 60..=14 * 60i32
    ) {
        let instant: DateTime<Utc> = Utc.timestamp_opt(seconds, 0).unwrap();
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let local = instant.with_timezone(&offset).to_rfc3339();
        prop_assert_eq!(parse_timestamp(&local).unwrap(), instant);
    }
}

// ── Extensions ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn uri_like_keys_are_valid(
        host in "[a-z]{1,10}",
        path in "[a-z0-9_/-]{0,20}"
    ) {
        let key = format!("http://{host}.example.com/{path}");
        prop_assert!(is_valid_extension_key(&key));
    }

    #[test]
    fn keys_with_whitespace_are_invalid(
        left in "[a-z]{1,8}",
        right in "[a-z]{1,8}"
    ) {
        let key = format!("{left} {right}");
        prop_assert!(!is_valid_extension_key(&key));
    }

    #[test]
    fn strings_are_stringified_verbatim(text in ".*") {
        prop_assert_eq!(stringify_value(&serde_json::Value::String(text.clone())), text);
    }
}
