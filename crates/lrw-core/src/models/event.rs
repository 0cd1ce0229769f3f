//! Caliper event model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vocabulary::AgentKind;

/// Extension key -> stringified value, ordered by key.
pub type EventExtensions = BTreeMap<String, String>;

/// A Caliper event: who did what to which entity, in which organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event_time: DateTime<Utc>,
    /// Canonical action, or the raw verb IRI when the verb is unregistered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<ResultEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Organization>,
    /// Coarse event kind (an `EventType` string).
    pub context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub jsonld_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identity strategy IRI for converted actors; other producers may send
    /// any Caliper agent type (`Person`, `SoftwareApplication`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "EventExtensions::is_empty")]
    pub extensions: EventExtensions,
}

impl Agent {
    /// The identity strategy, when `type` is one of the known strategy IRIs.
    pub fn kind(&self) -> Option<AgentKind> {
        self.type_.as_deref().and_then(AgentKind::parse)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub jsonld_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "EventExtensions::is_empty")]
    pub extensions: EventExtensions,
}

/// Result entity generated by an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEntity {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub jsonld_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "EventExtensions::is_empty")]
    pub extensions: EventExtensions,
}

/// Organizational group of an event, optionally nested in a parent organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub jsonld_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "EventExtensions::is_empty")]
    pub extensions: EventExtensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_organization_of: Option<Box<Organization>>,
}
