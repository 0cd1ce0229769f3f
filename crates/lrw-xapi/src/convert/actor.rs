//! Actor identity mapping.
//!
//! Forward precedence is openid, then mailbox, then account. For an account
//! the id is the account name when present, else the home page; the home page
//! is kept under `HOMEPAGE` only when the name was used. The reverse direction
//! always rebuilds an account from the id, so an id that was defaulted to the
//! home page comes back as the account name.

use lrw_core::constants::{CALIPER_JSONLD_CONTEXT, HOMEPAGE_EXTENSION};
use lrw_core::models::{Account, Actor, Agent, AgentKind, EventExtensions};

use crate::text::non_blank;

pub fn actor_to_agent(actor: &Actor) -> Agent {
    let mut extensions = EventExtensions::new();

    let (id, kind) = if let Some(openid) = non_blank(actor.openid.as_deref()) {
        (Some(openid.to_string()), Some(AgentKind::OpenId))
    } else if let Some(mailbox) = non_blank(actor.mailbox.as_deref()) {
        (Some(mailbox.to_string()), Some(AgentKind::Mailbox))
    } else if let Some(account) = &actor.account {
        let name = non_blank(account.name.as_deref());
        let id = match (non_blank(account.home_page.as_deref()), name) {
            (Some(home_page), Some(name)) => {
                extensions.insert(HOMEPAGE_EXTENSION.to_string(), home_page.to_string());
                Some(name.to_string())
            }
            (Some(home_page), None) => Some(home_page.to_string()),
            (None, name) => name.map(str::to_string),
        };
        (id, Some(AgentKind::Account))
    } else {
        (None, None)
    };

    Agent {
        jsonld_context: Some(CALIPER_JSONLD_CONTEXT.to_string()),
        id,
        name: actor.name.clone(),
        type_: kind.map(|k| k.as_str().to_string()),
        extensions,
    }
}

pub fn agent_to_actor(agent: &Agent) -> Actor {
    let mut actor = Actor {
        name: agent.name.clone(),
        ..Actor::default()
    };

    match agent.kind() {
        Some(AgentKind::OpenId) => actor.openid = agent.id.clone(),
        Some(AgentKind::Mailbox) => actor.mailbox = agent.id.clone(),
        _ => {
            let home_page = non_blank(
                agent
                    .extensions
                    .get(HOMEPAGE_EXTENSION)
                    .map(String::as_str),
            );
            actor.account = Some(Account {
                name: agent.id.clone(),
                home_page: home_page.map(str::to_string),
            });
        }
    }

    actor
}
