//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Layout used for transcript lines and headers.
pub const TRANSCRIPT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable point in time, stored as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Renders the timestamp in local time for transcripts.
    pub fn to_transcript_string(&self) -> String {
        self.0
            .with_timezone(&Local)
            .format(TRANSCRIPT_FORMAT)
            .to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
