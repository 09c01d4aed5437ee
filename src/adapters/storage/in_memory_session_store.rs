//! In-Memory Session Store Adapter
//!
//! Keeps every session in a process-wide map. Sessions are never evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SenderId, Timestamp};
use crate::domain::session::Session;
use crate::ports::{SessionGuard, SessionStore, SessionStoreError};

/// In-memory registry of per-sender sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SenderId, Arc<Mutex<Session>>>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Returns the session slot, inserting a fresh session if absent.
    async fn slot(&self, sender: &SenderId) -> Arc<Mutex<Session>> {
        if let Some(slot) = self.sessions.read().await.get(sender) {
            return Arc::clone(slot);
        }

        let mut sessions = self.sessions.write().await;
        let slot = sessions.entry(sender.clone()).or_insert_with(|| {
            tracing::debug!(sender = %sender, "Creating session");
            Arc::new(Mutex::new(Session::new(sender.clone(), Timestamp::now())))
        });
        Arc::clone(slot)
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn acquire(&self, sender: &SenderId) -> Result<SessionGuard, SessionStoreError> {
        let slot = self.slot(sender).await;
        Ok(slot.lock_owned().await)
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sender(id: &str) -> SenderId {
        SenderId::new(id).unwrap()
    }

    #[tokio::test]
    async fn acquire_creates_session_lazily() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.session_count().await, 0);

        let guard = store.acquire(&sender("alice")).await.unwrap();
        assert_eq!(guard.sender().as_str(), "alice");
        assert_eq!(guard.turns(), 0);
        drop(guard);

        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn session_survives_between_acquisitions() {
        let store = InMemorySessionStore::new();
        let at = Timestamp::now();

        {
            let mut guard = store.acquire(&sender("alice")).await.unwrap();
            guard.begin_turn("hello", &at);
        }

        let guard = store.acquire(&sender("alice")).await.unwrap();
        assert_eq!(guard.turns(), 1);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn senders_are_isolated() {
        let store = InMemorySessionStore::new();
        let at = Timestamp::now();

        store
            .acquire(&sender("alice"))
            .await
            .unwrap()
            .begin_turn("hi", &at);

        let bob = store.acquire(&sender("bob")).await.unwrap();
        assert_eq!(bob.turns(), 0);
    }

    #[tokio::test]
    async fn same_sender_waits_for_guard() {
        let store = InMemorySessionStore::new();
        let held = store.acquire(&sender("alice")).await.unwrap();

        let contender = store.clone();
        let waiting = tokio::spawn(async move {
            contender.acquire(&SenderId::new("alice").unwrap()).await.map(|g| g.turns())
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        drop(held);
        assert_eq!(waiting.await.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn other_sender_is_not_blocked() {
        let store = InMemorySessionStore::new();
        let _held = store.acquire(&sender("alice")).await.unwrap();

        let bob = tokio::time::timeout(Duration::from_secs(1), store.acquire(&sender("bob"))).await;
        assert!(bob.is_ok());
    }

    #[tokio::test]
    async fn clear_drops_sessions() {
        let store = InMemorySessionStore::new();
        let _ = store.acquire(&sender("alice")).await.unwrap();
        store.clear().await;
        assert_eq!(store.session_count().await, 0);
    }
}
