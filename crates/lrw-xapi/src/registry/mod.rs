//! Vocabulary registries.
//!
//! `BiRegistry` holds a forward map and an inverse map built once from a
//! static pair table. Construction fails if either side repeats, so a
//! registry that exists is always bijective. Nothing mutates a registry after
//! construction; share it freely across threads.

pub mod entity_types;
pub mod event_kinds;
pub mod verbs;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use lrw_core::constants::DEFAULT_XAPI_VERB;
use lrw_core::errors::{ConversionError, ConversionResult};
use lrw_core::models::{Action, EntityType, EventType};

pub use event_kinds::EventKindTable;

/// Bijective table between canonical values and external identifier strings.
#[derive(Debug, Clone)]
pub struct BiRegistry<K> {
    name: &'static str,
    forward: HashMap<K, &'static str>,
    inverse: HashMap<&'static str, K>,
}

impl<K: Copy + Eq + Hash + Debug> BiRegistry<K> {
    /// Build from `(canonical, external)` pairs, rejecting any repeat on either side.
    pub fn from_pairs(name: &'static str, pairs: &[(K, &'static str)]) -> ConversionResult<Self> {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());

        for &(key, external) in pairs {
            if forward.insert(key, external).is_some() {
                return Err(ConversionError::DuplicateRegistryValue {
                    registry: name,
                    value: format!("{key:?}"),
                });
            }
            if inverse.insert(external, key).is_some() {
                return Err(ConversionError::DuplicateRegistryValue {
                    registry: name,
                    value: external.to_string(),
                });
            }
        }

        Ok(Self {
            name,
            forward,
            inverse,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// External string registered for a canonical value.
    pub fn external(&self, key: K) -> Option<&'static str> {
        self.forward.get(&key).copied()
    }

    /// Canonical value registered for an external string.
    pub fn canonical(&self, external: &str) -> Option<K> {
        self.inverse.get(external).copied()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &'static str)> + '_ {
        self.forward.iter().map(|(&k, &v)| (k, v))
    }
}

/// The three read-only tables the converter consults.
#[derive(Debug, Clone)]
pub struct Registries {
    pub verbs: BiRegistry<Action>,
    pub entity_types: BiRegistry<EntityType>,
    pub event_kinds: EventKindTable,
}

impl Registries {
    /// Build and validate every table. Call once at startup.
    pub fn new() -> ConversionResult<Self> {
        Ok(Self {
            verbs: BiRegistry::from_pairs("verbs", verbs::VERB_ACTIONS)?,
            entity_types: BiRegistry::from_pairs("entity_types", entity_types::ACTIVITY_ENTITY_TYPES)?,
            event_kinds: EventKindTable::from_pairs(event_kinds::ACTION_EVENT_TYPES),
        })
    }

    /// Verb IRI -> canonical action string; unregistered verbs pass through.
    pub fn action_for_verb(&self, verb_id: &str) -> String {
        match self.verbs.canonical(verb_id) {
            Some(action) => action.as_str().to_string(),
            None => {
                tracing::debug!(verb = verb_id, "unregistered verb, passing through");
                verb_id.to_string()
            }
        }
    }

    /// Canonical action string -> verb IRI; anything unregistered maps to the
    /// default "experienced" verb.
    pub fn verb_for_action(&self, action: &str) -> &'static str {
        Action::parse(action)
            .and_then(|a| self.verbs.external(a))
            .unwrap_or(DEFAULT_XAPI_VERB)
    }

    /// Activity type IRI -> entity type string. Blank means `DigitalResource`;
    /// unregistered types pass through.
    pub fn entity_type_for_activity_type(&self, activity_type: Option<&str>) -> String {
        let Some(activity_type) = activity_type.filter(|t| !t.trim().is_empty()) else {
            return EntityType::DigitalResource.as_str().to_string();
        };
        match self.entity_types.canonical(activity_type) {
            Some(entity_type) => entity_type.as_str().to_string(),
            None => {
                tracing::debug!(activity_type, "unregistered activity type, passing through");
                activity_type.to_string()
            }
        }
    }

    /// Entity type string -> activity type IRI; unregistered types pass through.
    pub fn activity_type_for_entity_type(&self, entity_type: &str) -> String {
        EntityType::parse(entity_type)
            .and_then(|t| self.entity_types.external(t))
            .unwrap_or(entity_type)
            .to_string()
    }

    /// Coarse event kind for a verb IRI. Absent or unmapped verbs give `Event`.
    pub fn event_type_for_verb(&self, verb_id: Option<&str>) -> EventType {
        verb_id
            .and_then(|v| self.verbs.canonical(v))
            .and_then(|action| self.event_kinds.get(action))
            .unwrap_or(EventType::Event)
    }
}
