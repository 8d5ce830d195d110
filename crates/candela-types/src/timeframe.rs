//! Aggregation timeframe definitions.

use std::str::FromStr;

use crate::CandelaError;

/// Unit of an aggregation interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    /// Minutes.
    Minute,
    /// Hours.
    Hour,
    /// Days.
    Day,
}

impl IntervalUnit {
    /// Returns the number of minutes in one unit.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Minute => 1,
            Self::Hour => 60,
            Self::Day => 1440,
        }
    }

    /// Returns the single-character suffix used in timeframe tokens.
    #[must_use]
    pub const fn suffix(&self) -> char {
        match self {
            Self::Minute => 'm',
            Self::Hour => 'h',
            Self::Day => 'd',
        }
    }
}

/// Aggregation timeframe parsed from a token such as `"5m"`, `"1h"` or `"1d"`.
///
/// The token grammar is `<count><unit>` with a positive decimal count and a
/// unit of `m`, `h` or `d`. The distinct token `"tick"` selects tick-by-tick
/// output (no aggregation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeframe {
    /// Tick-by-tick (no aggregation).
    #[default]
    Tick,
    /// Fixed-duration interval, e.g. 5 minutes or 4 hours.
    Interval {
        /// Number of units per bucket.
        count: u32,
        /// Interval unit.
        unit: IntervalUnit,
    },
}

impl Timeframe {
    /// Creates an interval timeframe from a count and unit.
    #[must_use]
    pub const fn interval(count: u32, unit: IntervalUnit) -> Self {
        Self::Interval { count, unit }
    }

    /// Returns the bucket duration in minutes, or `None` for tick data.
    #[must_use]
    pub const fn minutes(&self) -> Option<u32> {
        match self {
            Self::Tick => None,
            Self::Interval { count, unit } => Some(*count * unit.minutes()),
        }
    }

    /// Returns the bucket duration in milliseconds, or `None` for tick data.
    #[must_use]
    pub const fn milliseconds(&self) -> Option<i64> {
        match self.minutes() {
            Some(m) => Some(m as i64 * 60_000),
            None => None,
        }
    }

    /// Returns true if this is tick data (no aggregation).
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tick => write!(f, "tick"),
            Self::Interval { count, unit } => write!(f, "{}{}", count, unit.suffix()),
        }
    }
}

impl FromStr for Timeframe {
    type Err = CandelaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "tick" {
            return Ok(Self::Tick);
        }

        let invalid = || CandelaError::InvalidTimeframe(s.to_string());

        let mut chars = s.chars();
        let unit = match chars.next_back() {
            Some('m') => IntervalUnit::Minute,
            Some('h') => IntervalUnit::Hour,
            Some('d') => IntervalUnit::Day,
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let count: u32 = digits.parse().map_err(|_| invalid())?;
        if count == 0 {
            return Err(invalid());
        }

        Ok(Self::Interval { count, unit })
    }
}
