//! In-Memory Transcript Writer Adapter
//!
//! Keeps the latest saved transcript per sender. Useful for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SenderId;
use crate::domain::session::Transcript;
use crate::ports::{TranscriptError, TranscriptWriter};

/// In-memory transcript storage
#[derive(Debug, Clone)]
pub struct InMemoryTranscriptWriter {
    transcripts: Arc<RwLock<HashMap<SenderId, Vec<String>>>>,
    writes: Arc<RwLock<usize>>,
}

impl InMemoryTranscriptWriter {
    pub fn new() -> Self {
        Self {
            transcripts: Arc::new(RwLock::new(HashMap::new())),
            writes: Arc::new(RwLock::new(0)),
        }
    }

    /// Lines of the last transcript saved for `sender`
    pub async fn lines_for(&self, sender: &SenderId) -> Option<Vec<String>> {
        self.transcripts.read().await.get(sender).cloned()
    }

    /// Total number of writes across all senders
    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.transcripts.write().await.clear();
        *self.writes.write().await = 0;
    }
}

impl Default for InMemoryTranscriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptWriter for InMemoryTranscriptWriter {
    async fn write(
        &self,
        sender: &SenderId,
        transcript: &Transcript,
    ) -> Result<(), TranscriptError> {
        self.transcripts
            .write()
            .await
            .insert(sender.clone(), transcript.lines().to_vec());
        *self.writes.write().await += 1;
        Ok(())
    }
}
