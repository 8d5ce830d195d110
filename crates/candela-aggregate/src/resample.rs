//! Bar-to-coarser-bar resampling.

use candela_types::Timeframe;
use chrono::{DateTime, Utc};

use crate::{Ohlcv, bucket_start};

/// Streaming bar resampler.
///
/// Merges already-aggregated bars into coarser buckets with the same
/// one-open-aggregate contract as [`TickAggregator`](crate::TickAggregator).
/// Volume and tick count accumulate by summation; spread is not tracked
/// across bars and comes out zero.
#[derive(Debug)]
pub struct BarAggregator {
    timeframe: Timeframe,
    current_bar: Option<ResampleBuilder>,
}

impl BarAggregator {
    /// Creates a new resampler for the given timeframe.
    #[must_use]
    pub const fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            current_bar: None,
        }
    }

    /// Returns the timeframe being resampled to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Processes a source bar, potentially emitting a completed coarser bar.
    pub fn process(&mut self, bar: Ohlcv) -> Option<Ohlcv> {
        let bar_start = self.bar_start_for(bar.timestamp);

        match self.current_bar.take() {
            Some(mut builder) if builder.timestamp == bar_start => {
                builder.update(&bar);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = builder.finish();
                self.current_bar = Some(ResampleBuilder::new(bar_start, &bar));
                Some(completed)
            }
            None => {
                self.current_bar = Some(ResampleBuilder::new(bar_start, &bar));
                None
            }
        }
    }

    /// Finishes resampling, returning any remaining partial bar.
    #[must_use]
    pub fn finish(self) -> Option<Ohlcv> {
        self.current_bar.map(ResampleBuilder::finish)
    }

    fn bar_start_for(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        match self.timeframe.minutes() {
            Some(minutes) => bucket_start(timestamp, minutes),
            None => timestamp,
        }
    }
}

/// Open-aggregate state for a coarser bar under construction.
#[derive(Debug)]
struct ResampleBuilder {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    tick_count: u32,
}

impl ResampleBuilder {
    /// Seeds a builder from the first source bar of a bucket.
    const fn new(timestamp: DateTime<Utc>, bar: &Ohlcv) -> Self {
        Self {
            timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            tick_count: bar.tick_count,
        }
    }

    /// Merges a further source bar into the open aggregate.
    fn update(&mut self, bar: &Ohlcv) {
        self.high = self.high.max(bar.high);
        self.low = self.low.min(bar.low);
        self.close = bar.close;
        self.volume += bar.volume;
        self.tick_count += bar.tick_count;
    }

    const fn finish(self) -> Ohlcv {
        Ohlcv::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.tick_count,
            0.0,
        )
    }
}

/// Resamples bars into a coarser timeframe.
///
/// Same contract as [`aggregate_ticks`](crate::aggregate_ticks): a local
/// copy is sorted by ascending timestamp, output is strictly ascending with
/// one bar per non-empty bucket, and end of input is the only flush trigger.
#[must_use]
pub fn resample_bars(bars: &[Ohlcv], timeframe: Timeframe) -> Vec<Ohlcv> {
    let mut sorted = bars.to_vec();
    sorted.sort_unstable_by_key(|b| b.timestamp);

    let mut aggregator = BarAggregator::new(timeframe);
    let mut output = Vec::new();

    for bar in sorted {
        if let Some(merged) = aggregator.process(bar) {
            output.push(merged);
        }
    }

    if let Some(merged) = aggregator.finish() {
        output.push(merged);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate_ticks;
    use candela_types::{IntervalUnit, Tick};
    use chrono::TimeZone;

    fn minute(count: u32) -> Timeframe {
        Timeframe::interval(count, IntervalUnit::Minute)
    }

    fn bar_at(minutes: i64, open: f64, high: f64, low: f64, close: f64) -> Ohlcv {
        let timestamp = Utc.timestamp_millis_opt(minutes * 60_000).unwrap();
        Ohlcv::new(timestamp, open, high, low, close, 100.0, 10, 0.0002)
    }

    #[test]
    fn test_merge_three_bars() {
        let bars = [
            bar_at(0, 1.10, 1.12, 1.09, 1.11),
            bar_at(5, 1.11, 1.15, 1.11, 1.14),
            bar_at(10, 1.14, 1.14, 1.08, 1.09),
        ];
        let merged = resample_bars(&bars, minute(15));

        assert_eq!(merged.len(), 1);
        let bar = merged[0];
        assert_eq!(bar.timestamp.timestamp(), 0);
        assert!((bar.open - 1.10).abs() < 1e-10);
        assert!((bar.high - 1.15).abs() < 1e-10);
        assert!((bar.low - 1.08).abs() < 1e-10);
        assert!((bar.close - 1.09).abs() < 1e-10);
        assert!((bar.volume - 300.0).abs() < 1e-10);
        assert_eq!(bar.tick_count, 30);
        assert_eq!(bar.spread, 0.0);
    }

    #[test]
    fn test_bucket_boundary_splits() {
        let bars = [
            bar_at(10, 1.10, 1.12, 1.09, 1.11),
            bar_at(15, 1.11, 1.15, 1.11, 1.14),
        ];
        let merged = resample_bars(&bars, minute(15));

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].timestamp.timestamp(), 0);
        assert_eq!(merged[1].timestamp.timestamp(), 15 * 60);
    }

    #[test]
    fn test_empty_input() {
        assert!(resample_bars(&[], minute(15)).is_empty());
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let bars = [
            bar_at(5, 1.11, 1.15, 1.11, 1.14),
            bar_at(0, 1.10, 1.12, 1.09, 1.11),
        ];
        let merged = resample_bars(&bars, minute(15));

        assert_eq!(merged.len(), 1);
        assert!((merged[0].open - 1.10).abs() < 1e-10);
        assert!((merged[0].close - 1.14).abs() < 1e-10);
    }

    #[test]
    fn test_two_stage_matches_direct_aggregation() {
        // ticks -> 15m must equal ticks -> 5m -> 15m for OHLC, volume and
        // tick count. Spread is untracked on resampling and excluded here.
        let base = Utc.timestamp_millis_opt(0).unwrap();
        let ticks: Vec<Tick> = (0..240)
            .map(|i| {
                let timestamp = base + chrono::TimeDelta::seconds(i * 11);
                let wobble = ((i * 31) % 17) as f64 * 0.0003;
                Tick::new(
                    timestamp,
                    1.1050 + wobble,
                    1.1040 + wobble,
                    Some(100.0 + i as f64),
                    Some(80.0),
                )
            })
            .collect();

        let direct = aggregate_ticks(&ticks, minute(15));
        let staged = resample_bars(&aggregate_ticks(&ticks, minute(5)), minute(15));

        assert_eq!(direct.len(), staged.len());
        for (a, b) in direct.iter().zip(&staged) {
            assert_eq!(a.timestamp, b.timestamp);
            assert_eq!(a.open, b.open);
            assert_eq!(a.high, b.high);
            assert_eq!(a.low, b.low);
            assert_eq!(a.close, b.close);
            assert_eq!(a.volume, b.volume);
            assert_eq!(a.tick_count, b.tick_count);
        }
    }
}
