//! In-memory session registry.
//!
//! Each browser session owns one [`SessionState`]. The registry hands out
//! ids, runs store operations against the right state under a lock, and drops
//! sessions that have been idle longer than the configured TTL.
//!
//! Any request without a known cookie opens a session, so the registry is
//! capped: once `max_sessions` are live, opening another evicts the session
//! seen least recently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{SessionId, SessionState};

/// Live sessions allowed when no explicit cap is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Registry failures. These are server faults, never user input errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Internal lock was poisoned.
    #[error("session registry lock poisoned")]
    LockPoisoned,
}

/// A session's state plus its last activity.
#[derive(Debug, Clone)]
struct SessionEntry {
    state: SessionState,
    last_seen: DateTime<Utc>,
}

impl SessionEntry {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: SessionState::new(),
            last_seen: now,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now - self.last_seen > ttl
    }
}

type Sessions = HashMap<SessionId, SessionEntry>;

/// Cloneable handle to every live session.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<Sessions>>,
    ttl: chrono::Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create an empty registry whose sessions expire after `ttl` of inactivity.
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    /// Cap the number of live sessions. A cap of zero is treated as one.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Sessions>, RegistryError> {
        self.sessions.lock().map_err(|_| RegistryError::LockPoisoned)
    }

    /// Return a live session id, creating a fresh session when `requested` is
    /// missing, unknown, or expired.
    ///
    /// The boolean is `true` when a new session was created.
    pub fn resolve(&self, requested: Option<SessionId>) -> Result<(SessionId, bool), RegistryError> {
        self.resolve_at(requested, Utc::now())
    }

    fn resolve_at(
        &self,
        requested: Option<SessionId>,
        now: DateTime<Utc>,
    ) -> Result<(SessionId, bool), RegistryError> {
        let mut sessions = self.lock()?;
        self.purge(&mut sessions, now);

        if let Some(id) = requested {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = now;
                return Ok((id, false));
            }
        }

        if sessions.len() >= self.max_sessions {
            evict_least_recent(&mut sessions);
        }

        let id = SessionId::new();
        sessions.insert(id, SessionEntry::new(now));
        tracing::debug!(session = %id, "created session");
        Ok((id, true))
    }

    fn purge(&self, sessions: &mut Sessions, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, "dropped idle sessions");
        }
    }

    /// Run `f` against a session's state while holding the registry lock.
    ///
    /// A session that vanished since it was resolved starts over empty.
    pub fn with_state<F, T>(&self, id: SessionId, f: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut SessionState) -> T,
    {
        let now = Utc::now();
        let mut sessions = self.lock()?;
        let entry = sessions.entry(id).or_insert_with(|| SessionEntry::new(now));
        entry.last_seen = now;
        Ok(f(&mut entry.state))
    }

    #[cfg(test)]
    fn snapshot(&self, id: SessionId) -> Option<SessionState> {
        self.lock().ok()?.get(&id).map(|entry| entry.state.clone())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().map(|sessions| sessions.len()).unwrap_or(0)
    }
}

fn evict_least_recent(sessions: &mut Sessions) {
    let oldest = sessions
        .iter()
        .min_by_key(|(_, entry)| entry.last_seen)
        .map(|(id, _)| *id);

    if let Some(id) = oldest {
        sessions.remove(&id);
        tracing::warn!(session = %id, "session cap reached, evicted least recent session");
    }
}
