//! InMemoryAcademicSessionStore: concurrent access via DashMap.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use lrw_core::errors::{SessionError, SessionResult};
use lrw_core::models::AcademicSession;
use lrw_core::session_span;
use lrw_core::traits::IAcademicSessionStore;

/// (tenant, org, sourced id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub tenant_id: String,
    pub org_id: String,
    pub sourced_id: String,
}

impl SessionKey {
    pub fn new(tenant_id: &str, org_id: &str, sourced_id: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            org_id: org_id.to_string(),
            sourced_id: sourced_id.to_string(),
        }
    }

    fn not_found(self) -> SessionError {
        SessionError::NotFound {
            tenant_id: self.tenant_id,
            org_id: self.org_id,
            sourced_id: self.sourced_id,
        }
    }
}

/// A stored session with its internal record id.
#[derive(Debug, Clone)]
pub struct StoredSession {
    /// Assigned on first insert, kept across updates.
    pub id: Uuid,
    pub session: AcademicSession,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Thread-safe academic session store using `DashMap` for concurrent access.
#[derive(Debug, Clone)]
pub struct InMemoryAcademicSessionStore {
    sessions: Arc<DashMap<SessionKey, StoredSession>>,
}

fn require(field: &'static str, value: &str) -> SessionResult<()> {
    if value.trim().is_empty() {
        return Err(SessionError::InvalidArgument { field });
    }
    Ok(())
}

impl InMemoryAcademicSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// The stored record, including its internal id.
    pub fn record(&self, tenant_id: &str, org_id: &str, sourced_id: &str) -> Option<StoredSession> {
        self.sessions
            .get(&SessionKey::new(tenant_id, org_id, sourced_id))
            .map(|r| r.clone())
    }

    /// Remove a session, returning it if it was stored.
    pub fn remove(&self, tenant_id: &str, org_id: &str, sourced_id: &str) -> Option<AcademicSession> {
        let _span = session_span!("remove", tenant_id, org_id).entered();
        let removed = self
            .sessions
            .remove(&SessionKey::new(tenant_id, org_id, sourced_id))
            .map(|(_, stored)| stored.session);
        tracing::debug!(sourced_id, removed = removed.is_some(), "academic session remove");
        removed
    }

    /// All sessions of one tenant's org, ordered by sourced id.
    pub fn sessions_for(&self, tenant_id: &str, org_id: &str) -> Vec<AcademicSession> {
        let mut sessions: Vec<AcademicSession> = self
            .sessions
            .iter()
            .filter(|r| r.key().tenant_id == tenant_id && r.key().org_id == org_id)
            .map(|r| r.value().session.clone())
            .collect();
        sessions.sort_by(|a, b| a.sourced_id.cmp(&b.sourced_id));
        sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for InMemoryAcademicSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IAcademicSessionStore for InMemoryAcademicSessionStore {
    fn find_by_sourced_id(
        &self,
        tenant_id: &str,
        org_id: &str,
        sourced_id: &str,
    ) -> SessionResult<AcademicSession> {
        let _span = session_span!("find", tenant_id, org_id).entered();
        let key = SessionKey::new(tenant_id, org_id, sourced_id);
        match self.sessions.get(&key) {
            Some(stored) => {
                tracing::debug!(sourced_id, "academic session found");
                Ok(stored.session.clone())
            }
            None => {
                tracing::debug!(sourced_id, "academic session not found");
                Err(key.not_found())
            }
        }
    }

    fn upsert(
        &self,
        tenant_id: &str,
        org_id: &str,
        session: AcademicSession,
    ) -> SessionResult<AcademicSession> {
        let _span = session_span!("upsert", tenant_id, org_id).entered();
        require("tenant_id", tenant_id)?;
        require("org_id", org_id)?;
        require("sourced_id", &session.sourced_id)?;

        let key = SessionKey::new(tenant_id, org_id, &session.sourced_id);
        let now = Utc::now();
        match self.sessions.entry(key) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get_mut();
                stored.session = session.clone();
                stored.updated_at = now;
                tracing::debug!(sourced_id = %session.sourced_id, id = %stored.id, "academic session updated");
            }
            Entry::Vacant(entry) => {
                let id = Uuid::new_v4();
                entry.insert(StoredSession {
                    id,
                    session: session.clone(),
                    created_at: now,
                    updated_at: now,
                });
                tracing::debug!(sourced_id = %session.sourced_id, id = %id, "academic session inserted");
            }
        }
        Ok(session)
    }
}
