//! Timestamp value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp attached to transcript entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns true if this timestamp is strictly after the other.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the underlying chrono value.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_not_after_a_later_now() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(!first.is_after(&second));
    }

    #[test]
    fn round_trips_through_serde() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
