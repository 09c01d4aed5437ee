//! Transcript Writer Port - Persists session transcripts.
//!
//! Every save overwrites the sender's transcript with the full buffer, so
//! implementations never need to append.

use async_trait::async_trait;

use crate::domain::foundation::SenderId;
use crate::domain::session::Transcript;

/// Errors that can occur while saving transcripts
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting transcripts
#[async_trait]
pub trait TranscriptWriter: Send + Sync {
    /// Replaces the stored transcript for `sender` with `transcript`.
    async fn write(&self, sender: &SenderId, transcript: &Transcript)
        -> Result<(), TranscriptError>;
}
