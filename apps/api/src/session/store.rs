//! In-memory session registry.
//!
//! One `SessionState` per visitor, keyed by a random UUID handed out on creation.
//! Sessions idle longer than the TTL are dropped; nothing is ever persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::state::SessionState;

struct SessionEntry {
    state: SessionState,
    created_at: DateTime<Utc>,
    last_seen: Instant,
}

/// Cheap to clone; all clones share the same map.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Starts a fresh session (light theme, no photo). Expired sessions are swept first.
    pub async fn create(&self) -> (Uuid, DateTime<Utc>) {
        self.purge_expired().await;

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        self.sessions.write().await.insert(
            id,
            SessionEntry {
                state: SessionState::new(),
                created_at,
                last_seen: Instant::now(),
            },
        );
        info!("Session {id} created");
        (id, created_at)
    }

    /// Runs `f` against a session's state. Takes the write lock, since reading
    /// refreshes the session's `last_seen`.
    pub async fn read<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&SessionState) -> T,
    ) -> Result<T, AppError> {
        self.update(id, |state| f(state)).await
    }

    /// Runs a mutation against a session's state. Touches the session.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        let expired = match sessions.get(&id) {
            Some(entry) => now.duration_since(entry.last_seen) > self.ttl,
            None => return Err(not_found(id)),
        };
        if expired {
            sessions.remove(&id);
            debug!("Session {id} expired on access");
            return Err(not_found(id));
        }

        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_seen = now;
        Ok(f(&mut entry.state))
    }

    pub async fn created_at(&self, id: Uuid) -> Result<DateTime<Utc>, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|entry| entry.created_at)
            .ok_or_else(|| not_found(id))
    }

    /// Ends a session explicitly.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                info!("Session {id} ended");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Drops every session idle longer than the TTL. Returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= self.ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!("Purged {purged} idle session(s)");
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found or expired"))
}
