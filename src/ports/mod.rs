//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NluClassifier` - Intent and entity recognition for each turn
//! - `SessionStore` - Per-sender session registry with scoped locking
//! - `TranscriptWriter` - Persistence for session transcripts

mod nlu;
mod session_store;
mod transcript_writer;

pub use nlu::{Entity, Intent, NluClassifier, NluError, NluParse, FALLBACK_INTENT, PROGRAM_ENTITY};
pub use session_store::{SessionGuard, SessionStore, SessionStoreError};
pub use transcript_writer::{TranscriptError, TranscriptWriter};
