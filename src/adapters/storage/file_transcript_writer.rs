//! File-based Transcript Writer Adapter
//!
//! Writes one text file per sender under a base directory. Each sender is
//! assigned `chat_history_NNN.txt` on first write and keeps that name for
//! the process lifetime; the file is rewritten in full on every save.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::SenderId;
use crate::domain::session::Transcript;
use crate::ports::{TranscriptError, TranscriptWriter};

const FILE_PREFIX: &str = "chat_history_";
const FILE_SUFFIX: &str = ".txt";

/// File-based transcript storage
#[derive(Debug, Clone)]
pub struct FileTranscriptWriter {
    base_path: PathBuf,
    assignments: Arc<Mutex<HashMap<SenderId, u32>>>,
}

impl FileTranscriptWriter {
    /// Create a writer rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let writer = FileTranscriptWriter::new("./chat_histories");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            assignments: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path assigned to `sender`, if it has written before
    pub async fn path_for(&self, sender: &SenderId) -> Option<PathBuf> {
        self.assignments
            .lock()
            .await
            .get(sender)
            .map(|n| self.file_path(*n))
    }

    fn file_path(&self, number: u32) -> PathBuf {
        self.base_path
            .join(format!("{}{:03}{}", FILE_PREFIX, number, FILE_SUFFIX))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), TranscriptError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| TranscriptError::IoError(e.to_string()))
    }

    /// Highest transcript number already present on disk
    async fn max_on_disk(&self) -> Result<u32, TranscriptError> {
        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| TranscriptError::IoError(e.to_string()))?;

        let mut max = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| TranscriptError::IoError(e.to_string()))?
        {
            let name = entry.file_name();
            if let Some(number) = name.to_str().and_then(parse_file_number) {
                max = max.max(number);
            }
        }
        Ok(max)
    }

    /// Returns the sender's file number, assigning the next free one on first use
    async fn assign(&self, sender: &SenderId) -> Result<u32, TranscriptError> {
        let mut assignments = self.assignments.lock().await;
        if let Some(number) = assignments.get(sender) {
            return Ok(*number);
        }

        let assigned = assignments.values().copied().max().unwrap_or(0);
        let next = self.max_on_disk().await?.max(assigned) + 1;
        assignments.insert(sender.clone(), next);
        tracing::debug!(sender = %sender, number = next, "Assigned transcript file");
        Ok(next)
    }
}

/// Extracts `NNN` from `chat_history_NNN.txt`.
fn parse_file_number(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[async_trait]
impl TranscriptWriter for FileTranscriptWriter {
    async fn write(
        &self,
        sender: &SenderId,
        transcript: &Transcript,
    ) -> Result<(), TranscriptError> {
        self.ensure_dir().await?;
        let number = self.assign(sender).await?;

        fs::write(self.file_path(number), transcript.render())
            .await
            .map_err(|e| TranscriptError::IoError(e.to_string()))
    }
}
