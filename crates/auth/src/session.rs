//! Explicit session objects with a bounded lifetime.
//!
//! A session is created by a successful credentials check, handed to the
//! shell as a bearer token, and invalidated by logout or expiry. The
//! data-management core never reads session state; the HTTP boundary
//! validates the token and passes context downward.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use larder_core::SessionId;

/// One authenticated interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown session")]
    Unknown,

    #[error("session has expired")]
    Expired,
}

/// In-memory registry of live sessions.
///
/// Single-process, like the single-writer storage model underneath it;
/// sessions do not survive a restart.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new session starting at `now`.
    pub fn open(&self, now: DateTime<Utc>) -> Session {
        let session = Session {
            id: SessionId::new(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(session.id, session);
        }
        session
    }

    /// Validate a presented token. Expired sessions are dropped on sight.
    pub fn validate(&self, id: SessionId, now: DateTime<Utc>) -> Result<Session, SessionError> {
        let session = {
            let sessions = self.sessions.read().map_err(|_| SessionError::Unknown)?;
            sessions.get(&id).copied().ok_or(SessionError::Unknown)?
        };

        if session.is_expired(now) {
            self.revoke(id);
            return Err(SessionError::Expired);
        }
        Ok(session)
    }

    /// Invalidate a session (logout). Unknown ids are a no-op.
    pub fn revoke(&self, id: SessionId) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::hours(12))
    }

    #[test]
    fn open_then_validate_succeeds() {
        let store = store();
        let now = Utc::now();
        let session = store.open(now);

        let validated = store.validate(session.id, now).unwrap();
        assert_eq!(validated, session);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let store = store();
        assert_eq!(
            store.validate(SessionId::new(), Utc::now()),
            Err(SessionError::Unknown)
        );
    }

    #[test]
    fn expired_session_is_rejected_and_dropped() {
        let store = store();
        let opened_at = Utc::now();
        let session = store.open(opened_at);

        let later = opened_at + Duration::hours(13);
        assert_eq!(
            store.validate(session.id, later),
            Err(SessionError::Expired)
        );
        // A second attempt no longer finds it at all.
        assert_eq!(
            store.validate(session.id, opened_at),
            Err(SessionError::Unknown)
        );
    }

    #[test]
    fn revoked_session_is_rejected() {
        let store = store();
        let now = Utc::now();
        let session = store.open(now);

        store.revoke(session.id);
        assert_eq!(store.validate(session.id, now), Err(SessionError::Unknown));
    }

    #[test]
    fn validate_at_exact_expiry_is_expired() {
        let store = store();
        let now = Utc::now();
        let session = store.open(now);

        assert_eq!(
            store.validate(session.id, session.expires_at),
            Err(SessionError::Expired)
        );
    }
}
