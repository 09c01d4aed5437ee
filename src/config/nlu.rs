//! NLU provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// NLU provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NluConfig {
    /// Which classifier handles intent recognition
    #[serde(default)]
    pub provider: NluProvider,

    /// Base URL of a Rasa-compatible server
    pub url: Option<String>,

    /// Optional token passed to the NLU server
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// NLU provider type
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NluProvider {
    /// Built-in keyword rules
    #[default]
    Keyword,
    /// External Rasa-compatible `/model/parse` endpoint
    Rasa,
}

impl NluConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token, when one is configured and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Validate NLU configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidNluTimeout);
        }

        if self.provider == NluProvider::Rasa {
            let url = self
                .url
                .as_deref()
                .filter(|u| !u.is_empty())
                .ok_or(ValidationError::MissingRequired("NLU__URL"))?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidNluUrl);
            }
        }

        Ok(())
    }
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            provider: NluProvider::default(),
            url: None,
            token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nlu_config_defaults() {
        let config = NluConfig::default();
        assert_eq!(config.provider, NluProvider::Keyword);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rasa_requires_url() {
        let config = NluConfig {
            provider: NluProvider::Rasa,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_rasa_url_must_be_http() {
        let config = NluConfig {
            provider: NluProvider::Rasa,
            url: Some("ftp://nlu.local".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNluUrl)));

        let config = NluConfig {
            provider: NluProvider::Rasa,
            url: Some("http://localhost:5006".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config = NluConfig {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(config.token().is_none());
    }
}
