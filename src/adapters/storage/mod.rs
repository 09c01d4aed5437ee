//! Storage Adapters
//!
//! Implementations of the SessionStore and TranscriptWriter ports.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Process-lifetime session registry
//! - **FileTranscriptWriter** - One `chat_history_NNN.txt` file per sender
//! - **InMemoryTranscriptWriter** - Keeps transcripts in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileTranscriptWriter, InMemorySessionStore};
//!
//! let sessions = InMemorySessionStore::new();
//! let transcripts = FileTranscriptWriter::new("./chat_histories");
//! ```

mod file_transcript_writer;
mod in_memory_session_store;
mod in_memory_transcript_writer;

pub use file_transcript_writer::FileTranscriptWriter;
pub use in_memory_session_store::InMemorySessionStore;
pub use in_memory_transcript_writer::InMemoryTranscriptWriter;
