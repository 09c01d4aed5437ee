//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Opaque identifier of the client a conversation belongs to.
///
/// Supplied by the caller on every turn; one session exists per distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SenderId(String);

impl SenderId {
    /// Sender used when a request does not name one.
    pub const DEFAULT: &'static str = "default";

    /// Creates a new SenderId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("sender"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SenderId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SenderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SenderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SenderId> for String {
    fn from(id: SenderId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_id_rejects_empty() {
        assert!(SenderId::new("").is_err());
        assert!(SenderId::new("   ").is_err());
    }

    #[test]
    fn sender_id_preserves_value() {
        let id = SenderId::new("user-42").unwrap();
        assert_eq!(id.as_str(), "user-42");
        assert_eq!(id.to_string(), "user-42");
    }

    #[test]
    fn sender_id_default_is_named_default() {
        assert_eq!(SenderId::default().as_str(), "default");
    }

    #[test]
    fn sender_id_deserializes_with_validation() {
        let ok: Result<SenderId, _> = serde_json::from_str("\"abc\"");
        assert!(ok.is_ok());

        let empty: Result<SenderId, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }
}
