//! The statement <-> event facade.

use lrw_core::config::ConversionConfig;
use lrw_core::conversion_span;
use lrw_core::errors::{ConversionError, ConversionResult};
use lrw_core::models::{Event, Statement, Verb};
use lrw_core::tracing::names;
use lrw_core::traits::IEventConverter;

use crate::convert::{
    activity_to_entity, actor_to_agent, agent_to_actor, entity_to_activity, entity_to_result,
    result_to_entity,
};
use crate::group::{organization_to_context, resolve_group};
use crate::registry::Registries;
use crate::timestamp::{format_timestamp, normalize_timestamp};

/// Converts xAPI statements to Caliper events and back.
///
/// Holds the registries built at construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct XapiConverter {
    registries: Registries,
    config: ConversionConfig,
}

impl XapiConverter {
    /// Build and validate the registries. Fails when a registry table is not
    /// bijective.
    pub fn new(config: ConversionConfig) -> ConversionResult<Self> {
        let registries = Registries::new()?;
        tracing::debug!(
            verbs = registries.verbs.len(),
            entity_types = registries.entity_types.len(),
            event_kinds = registries.event_kinds.len(),
            "registries initialized"
        );
        Ok(Self { registries, config })
    }

    pub fn with_defaults() -> ConversionResult<Self> {
        Self::new(ConversionConfig::default())
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Statement -> event. Missing optional parts are simply absent on the
    /// event; a missing timestamp becomes the current time.
    pub fn from_xapi(&self, statement: &Statement) -> ConversionResult<Event> {
        let span = conversion_span!(names::DIRECTION_FROM_XAPI, statement.id.as_deref());
        let _guard = span.enter();

        if statement.actor.is_none() && statement.verb.is_none() && statement.object.is_none() {
            return Err(ConversionError::Unusable {
                reason: "statement has no actor, verb, or object".to_string(),
            });
        }

        let event_time = normalize_timestamp(statement.timestamp.as_deref())?;
        let verb_id = statement.verb.as_ref().map(|verb| verb.id.as_str());

        Ok(Event {
            id: statement.id.clone(),
            event_time,
            action: verb_id.map(|id| self.registries.action_for_verb(id)),
            actor: statement.actor.as_ref().map(actor_to_agent),
            object: statement
                .object
                .as_ref()
                .map(|activity| activity_to_entity(activity, &self.registries)),
            generated: statement
                .result
                .as_ref()
                .and_then(|result| result_to_entity(result, self.config.generate_result_ids)),
            group: statement.context.as_ref().and_then(resolve_group),
            context: self.registries.event_type_for_verb(verb_id).to_string(),
        })
    }

    /// Event -> statement. No action means no verb. Fails only in strict
    /// mode, on an extension key that is not a valid identifier.
    pub fn to_xapi(&self, event: &Event) -> ConversionResult<Statement> {
        let span = conversion_span!(names::DIRECTION_TO_XAPI, event.id.as_deref());
        let _guard = span.enter();

        let strict = self.config.strict_extension_keys;
        let verb = event
            .action
            .as_deref()
            .filter(|action| !action.trim().is_empty())
            .map(|action| Verb::new(self.registries.verb_for_action(action)));

        let object = event
            .object
            .as_ref()
            .map(|entity| entity_to_activity(entity, &self.registries, strict))
            .transpose()?;
        let result = match &event.generated {
            Some(generated) => entity_to_result(generated, strict)?,
            None => None,
        };

        Ok(Statement {
            id: event.id.clone(),
            timestamp: Some(format_timestamp(&event.event_time)),
            actor: event.actor.as_ref().map(agent_to_actor),
            verb,
            object,
            result,
            context: event.group.as_ref().map(organization_to_context),
        })
    }
}

impl IEventConverter for XapiConverter {
    fn to_event(&self, statement: &Statement) -> ConversionResult<Event> {
        self.from_xapi(statement)
    }

    fn to_statement(&self, event: &Event) -> ConversionResult<Statement> {
        self.to_xapi(event)
    }
}
