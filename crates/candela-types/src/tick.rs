//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tick representing a bid/ask price observation.
///
/// Volumes are optional: some sources publish quotes without depth. The
/// engine never validates `ask >= bid`; ticks are taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the observation (UTC).
    pub timestamp: DateTime<Utc>,
    /// Ask (offer) price.
    pub ask: f64,
    /// Bid price.
    pub bid: f64,
    /// Volume available at the ask price, if published.
    #[serde(default)]
    pub ask_volume: Option<f64>,
    /// Volume available at the bid price, if published.
    #[serde(default)]
    pub bid_volume: Option<f64>,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        ask: f64,
        bid: f64,
        ask_volume: Option<f64>,
        bid_volume: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }

    /// Returns the mid price (average of ask and bid).
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Returns the spread (ask - bid).
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    /// Returns the mean of bid and ask volume, or zero when either side is
    /// absent.
    #[must_use]
    pub fn mid_volume(&self) -> f64 {
        match (self.bid_volume, self.ask_volume) {
            (Some(bid), Some(ask)) => (bid + ask) / 2.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_mid_price() {
        let tick = Tick::new(Utc::now(), 1.1001, 1.1000, Some(100.0), Some(200.0));
        assert!((tick.mid() - 1.10005).abs() < 1e-10);
    }

    #[test]
    fn test_tick_spread() {
        let tick = Tick::new(Utc::now(), 1.1001, 1.1000, Some(100.0), Some(200.0));
        assert!((tick.spread() - 0.0001).abs() < 1e-10);
    }

    #[test]
    fn test_mid_volume() {
        let tick = Tick::new(Utc::now(), 1.1001, 1.1000, Some(100.0), Some(200.0));
        assert!((tick.mid_volume() - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_mid_volume_missing_side() {
        let tick = Tick::new(Utc::now(), 1.1001, 1.1000, Some(100.0), None);
        assert_eq!(tick.mid_volume(), 0.0);

        let tick = Tick::new(Utc::now(), 1.1001, 1.1000, None, None);
        assert_eq!(tick.mid_volume(), 0.0);
    }
}
