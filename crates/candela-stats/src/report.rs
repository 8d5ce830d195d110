//! Statistics report structures.

use candela_types::{Result, TimeRange};
use serde::{Deserialize, Serialize};

use crate::moments;

/// Min/max/mean/std summary of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (zero for a single value).
    pub std: f64,
}

impl DistributionSummary {
    /// Summarizes a non-empty value series.
    ///
    /// # Errors
    ///
    /// Fails with `InsufficientData` on an empty series.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let mean = moments::mean(values)?;
        let std = moments::std_dev(values)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            min,
            max,
            mean,
            std,
        })
    }
}

/// Moment statistics of the simple-returns series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnsSummary {
    /// Mean return.
    pub mean: f64,
    /// Population standard deviation of returns.
    pub std: f64,
    /// Fisher-Pearson adjusted sample skewness.
    pub skew: f64,
    /// Sample-adjusted excess kurtosis.
    pub kurtosis: f64,
}

impl ReturnsSummary {
    /// Summarizes a returns series.
    ///
    /// # Errors
    ///
    /// Fails with `InsufficientData` when the series is shorter than the
    /// minimum sample of any requested moment (1 for mean/std, 3 for
    /// skewness, 4 for kurtosis).
    pub fn from_values(returns: &[f64]) -> Result<Self> {
        Ok(Self {
            mean: moments::mean(returns)?,
            std: moments::std_dev(returns)?,
            skew: moments::skewness(returns)?,
            kurtosis: moments::excess_kurtosis(returns)?,
        })
    }
}

/// Distributional statistics of a tick window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Number of ticks in the window.
    pub tick_count: usize,
    /// First/last tick timestamps by input position.
    pub time_range: TimeRange,
    /// Spread (ask - bid) distribution.
    pub spread: DistributionSummary,
    /// Mid-price distribution.
    pub price: DistributionSummary,
    /// Simple-returns moments.
    pub returns: ReturnsSummary,
}

impl StatisticsReport {
    /// Formats the report as a human-readable multi-line summary.
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "Ticks: {}\n\
             Window: {}\n\
             Spread: min {:.6}, max {:.6}, mean {:.6} (std {:.6})\n\
             Mid price: min {:.5}, max {:.5}, mean {:.5} (std {:.5})\n\
             Returns: mean {:.6e}, std {:.6e}, skew {:.4}, excess kurtosis {:.4}",
            self.tick_count,
            self.time_range,
            self.spread.min,
            self.spread.max,
            self.spread.mean,
            self.spread.std,
            self.price.min,
            self.price.max,
            self.price.mean,
            self.price.std,
            self.returns.mean,
            self.returns.std,
            self.returns.skew,
            self.returns.kurtosis,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use candela_types::CandelaError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_single_value() {
        let summary = DistributionSummary::from_values(&[1.105]).unwrap();

        assert_relative_eq!(summary.min, 1.105);
        assert_relative_eq!(summary.max, 1.105);
        assert_relative_eq!(summary.mean, 1.105);
        assert_relative_eq!(summary.std, 0.0);
    }

    #[test]
    fn test_summary_min_max() {
        let summary = DistributionSummary::from_values(&[3.0, 1.0, 2.0]).unwrap();

        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.max, 3.0);
        assert_relative_eq!(summary.mean, 2.0);
    }

    #[test]
    fn test_summary_empty() {
        assert!(matches!(
            DistributionSummary::from_values(&[]),
            Err(CandelaError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_returns_summary_too_short() {
        assert!(matches!(
            ReturnsSummary::from_values(&[0.01, -0.02, 0.01]),
            Err(CandelaError::InsufficientData {
                statistic: "kurtosis",
                ..
            })
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = StatisticsReport {
            tick_count: 2,
            time_range: TimeRange::new(timestamp, timestamp),
            spread: DistributionSummary::from_values(&[0.0001, 0.0002]).unwrap(),
            price: DistributionSummary::from_values(&[1.10, 1.11]).unwrap(),
            returns: ReturnsSummary {
                mean: 0.0,
                std: 0.0,
                skew: 0.0,
                kurtosis: 0.0,
            },
        };

        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["tick_count"], 2);
        assert!(json["time_range"]["from"].is_string());
        assert!(json["spread"]["mean"].is_number());
        assert!(json["price"]["std"].is_number());
        assert!(json["returns"]["kurtosis"].is_number());
    }

    #[test]
    fn test_format_summary_mentions_sections() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = StatisticsReport {
            tick_count: 5,
            time_range: TimeRange::new(timestamp, timestamp),
            spread: DistributionSummary::from_values(&[0.0001]).unwrap(),
            price: DistributionSummary::from_values(&[1.10]).unwrap(),
            returns: ReturnsSummary {
                mean: 0.0001,
                std: 0.001,
                skew: 0.5,
                kurtosis: 1.0,
            },
        };

        let text = report.format_summary();
        assert!(text.contains("Ticks: 5"));
        assert!(text.contains("Spread:"));
        assert!(text.contains("Mid price:"));
        assert!(text.contains("Returns:"));
    }
}
