//! Session Store Port - Registry of per-sender sessions.
//!
//! Sessions are created lazily on first acquisition and live for the
//! process lifetime. Acquisition hands out an owned lock guard; holding it
//! for the whole turn serializes requests from the same sender while
//! different senders proceed concurrently.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::foundation::SenderId;
use crate::domain::session::Session;

/// Exclusive access to one session for the duration of a turn.
pub type SessionGuard = OwnedMutexGuard<Session>;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for acquiring per-sender sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the sender's session, creating it on first use.
    ///
    /// Waits while another turn for the same sender holds the guard.
    async fn acquire(&self, sender: &SenderId) -> Result<SessionGuard, SessionStoreError>;

    /// Number of sessions created so far.
    async fn session_count(&self) -> usize;
}
