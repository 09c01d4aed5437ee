//! NLU Port - Interface for intent and entity recognition.
//!
//! The assistant depends on an intent classifier that runs once per turn
//! with the raw utterance. Its result selects the action plan and is logged
//! to the transcript; the assistant's own keyword tables run independently.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl NluClassifier for Echo {
//!     async fn parse(&self, text: &str, _sender: &SenderId) -> Result<NluParse, NluError> {
//!         Ok(NluParse::new(Intent::new("ask_follow_up", 1.0)))
//!     }
//!
//!     fn provider_name(&self) -> &'static str {
//!         "echo"
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SenderId;

/// Intent name reported when nothing was recognized.
pub const FALLBACK_INTENT: &str = "nlu_fallback";

/// Entity name carrying a program code.
pub const PROGRAM_ENTITY: &str = "program";

/// Port for intent classification.
#[async_trait]
pub trait NluClassifier: Send + Sync {
    /// Classifies one utterance.
    async fn parse(&self, text: &str, sender: &SenderId) -> Result<NluParse, NluError>;

    /// Short provider name for logs (e.g., "keyword", "rasa").
    fn provider_name(&self) -> &'static str;
}

/// Recognized intent with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub confidence: f64,
}

impl Intent {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_INTENT, 0.0)
    }
}

/// Extracted entity value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    pub value: String,
}

impl Entity {
    pub fn new(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
        }
    }
}

/// Full classification result for one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NluParse {
    pub intent: Intent,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl NluParse {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>, value: impl Into<String>) -> Self {
        self.entities.push(Entity::new(entity, value));
        self
    }

    /// First value recorded for the named entity.
    pub fn entity(&self, name: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.entity == name)
            .map(|e| e.value.as_str())
    }
}

/// NLU errors.
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    /// Classifier could not be reached or answered with an error status.
    #[error("nlu unavailable: {0}")]
    Unavailable(String),

    /// Request exceeded the configured timeout.
    #[error("nlu request timed out")]
    Timeout,

    /// Response body did not match the expected shape.
    #[error("invalid nlu response: {0}")]
    InvalidResponse(String),

    /// Client construction or configuration problem.
    #[error("nlu configuration error: {0}")]
    Configuration(String),
}
