//! Conversation stage labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse position of a multi-turn exchange.
///
/// `Switching` is transient: it is written just before a unit switch
/// completes and is normally overwritten in the same batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Inquiring,
    Switching,
    Comparing,
    DiscussingDifficulty,
    FollowingUp,
    ProvidingRequirements,
    Recommending,
    FacilityInfo,
}

impl Stage {
    /// Returns the snake_case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Inquiring => "inquiring",
            Stage::Switching => "switching",
            Stage::Comparing => "comparing",
            Stage::DiscussingDifficulty => "discussing_difficulty",
            Stage::FollowingUp => "following_up",
            Stage::ProvidingRequirements => "providing_requirements",
            Stage::Recommending => "recommending",
            Stage::FacilityInfo => "facility_info",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_label_matches_as_str() {
        for stage in [
            Stage::Inquiring,
            Stage::Switching,
            Stage::Comparing,
            Stage::DiscussingDifficulty,
            Stage::FollowingUp,
            Stage::ProvidingRequirements,
            Stage::Recommending,
            Stage::FacilityInfo,
        ] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
    }
}
