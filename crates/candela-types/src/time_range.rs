//! Time range of a data window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First/last instant pair of a data window.
///
/// Taken by input position, not by chronological min/max: callers supplying
/// unsorted data get a range that reflects array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Timestamp of the first element.
    pub from: DateTime<Utc>,
    /// Timestamp of the last element.
    pub to: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new time range.
    #[must_use]
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Returns the signed duration between `from` and `to`.
    #[must_use]
    pub fn duration(&self) -> chrono::TimeDelta {
        self.to - self.from
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap();
        let range = TimeRange::new(from, to);

        assert_eq!(range.duration().num_minutes(), 90);
    }

    #[test]
    fn test_display() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let range = TimeRange::new(from, to);

        assert!(range.to_string().contains(" to "));
    }
}
