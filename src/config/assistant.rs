//! Conversation gateway configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::{GatewaySettings, DEFAULT_FALLBACK_MESSAGE, DEFAULT_FEEDBACK_MESSAGE};
use crate::domain::session::{QuotaPolicy, DEFAULT_MESSAGE_LIMIT};

use super::error::ValidationError;

/// Conversation gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Turns allowed per sender before further input is refused
    #[serde(default = "default_message_limit")]
    pub message_limit: u32,

    /// Message sent on the final allowed turn and on every refused turn
    #[serde(default = "default_feedback_message")]
    pub feedback_message: String,

    /// Reply used when no action produced output
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Directory receiving `chat_history_NNN.txt` files
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: PathBuf,
}

impl AssistantConfig {
    /// Build the gateway settings consumed by the turn handler.
    pub fn gateway_settings(&self) -> Result<GatewaySettings, ValidationError> {
        let quota = QuotaPolicy::new(self.message_limit)
            .map_err(|_| ValidationError::InvalidMessageLimit)?;
        Ok(GatewaySettings {
            quota,
            feedback_message: self.feedback_message.clone(),
            fallback_message: self.fallback_message.clone(),
        })
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message_limit == 0 {
            return Err(ValidationError::InvalidMessageLimit);
        }
        if self.transcript_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyTranscriptDir);
        }
        if self.feedback_message.trim().is_empty() {
            return Err(ValidationError::MissingRequired("FEEDBACK_MESSAGE"));
        }
        if self.fallback_message.trim().is_empty() {
            return Err(ValidationError::MissingRequired("FALLBACK_MESSAGE"));
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            message_limit: default_message_limit(),
            feedback_message: default_feedback_message(),
            fallback_message: default_fallback_message(),
            transcript_dir: default_transcript_dir(),
        }
    }
}

fn default_message_limit() -> u32 {
    DEFAULT_MESSAGE_LIMIT
}

fn default_feedback_message() -> String {
    DEFAULT_FEEDBACK_MESSAGE.to_string()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

fn default_transcript_dir() -> PathBuf {
    PathBuf::from("chat_histories")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_config_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.message_limit, 10);
        assert_eq!(config.transcript_dir, PathBuf::from("chat_histories"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gateway_settings_carry_limit_and_messages() {
        let config = AssistantConfig {
            message_limit: 3,
            feedback_message: "thanks".to_string(),
            ..Default::default()
        };
        let settings = config.gateway_settings().unwrap();
        assert_eq!(settings.quota.limit(), 3);
        assert_eq!(settings.feedback_message, "thanks");
        assert_eq!(settings.fallback_message, DEFAULT_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = AssistantConfig {
            message_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMessageLimit)
        ));
        assert!(config.gateway_settings().is_err());
    }

    #[test]
    fn test_empty_transcript_dir_rejected() {
        let config = AssistantConfig {
            transcript_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyTranscriptDir)
        ));
    }
}
