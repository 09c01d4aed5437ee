//! Per-session message quota.

use crate::domain::foundation::ValidationError;

/// Default number of turns served with real content.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 10;

/// Outcome of checking a turn number against the quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaVerdict {
    /// Below the limit; a normal turn.
    Open,
    /// Exactly the limit; normal replies followed by the feedback message.
    Final,
    /// Past the limit; only the feedback message is returned.
    Exhausted,
}

impl QuotaVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaVerdict::Open => "open",
            QuotaVerdict::Final => "final",
            QuotaVerdict::Exhausted => "exhausted",
        }
    }
}

/// Turn-count gate applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    limit: u32,
}

impl QuotaPolicy {
    /// Creates a policy; the limit must be at least one turn.
    pub fn new(limit: u32) -> Result<Self, ValidationError> {
        if limit < 1 {
            return Err(ValidationError::below_minimum("message_limit", 1, limit));
        }
        Ok(Self { limit })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Classifies a 1-based turn number.
    pub fn evaluate(&self, turn: u32) -> QuotaVerdict {
        use std::cmp::Ordering;

        match turn.cmp(&self.limit) {
            Ordering::Less => QuotaVerdict::Open,
            Ordering::Equal => QuotaVerdict::Final,
            Ordering::Greater => QuotaVerdict::Exhausted,
        }
    }
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}
