use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// Server-side session lifetime.
const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
struct Session {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// In-memory session store mapping random tokens to user ids.
/// Expired sessions are rejected on resolve and swept by the background
/// housekeeping task.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for the user and returns the cookie token.
    pub async fn create(&self, user_id: i64) -> String {
        self.insert(user_id, Duration::hours(SESSION_TTL_HOURS)).await
    }

    async fn insert(&self, user_id: i64, ttl: Duration) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            expires_at: Utc::now() + ttl,
        };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Resolves a token to its user id. Expired sessions are removed and
    /// resolve as `None`.
    pub async fn resolve(&self, token: &str) -> Option<i64> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.user_id),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    pub async fn destroy(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Removes all expired sessions, returning how many were dropped.
    pub async fn prune_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_resolve() {
        let store = SessionStore::new();
        let token = store.create(7).await;
        assert_eq!(store.resolve(&token).await, Some(7));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_none() {
        let store = SessionStore::new();
        assert_eq!(store.resolve("nope").await, None);
    }

    #[tokio::test]
    async fn test_destroy_invalidates_token() {
        let store = SessionStore::new();
        let token = store.create(7).await;
        store.destroy(&token).await;
        assert_eq!(store.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_removed() {
        let store = SessionStore::new();
        let token = store.insert(7, Duration::hours(-1)).await;
        assert_eq!(store.resolve(&token).await, None);
        // removed on first resolve
        assert_eq!(store.sessions.read().await.len(), 0);
    }

    #[tokio::test]
    async fn test_prune_expired_keeps_live_sessions() {
        let store = SessionStore::new();
        store.insert(1, Duration::hours(-1)).await;
        let live = store.insert(2, Duration::hours(1)).await;
        assert_eq!(store.prune_expired().await, 1);
        assert_eq!(store.resolve(&live).await, Some(2));
    }
}
