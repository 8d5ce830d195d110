//! Streaming tick-to-OHLCV aggregation.

use candela_types::{Tick, Timeframe};
use chrono::{DateTime, Utc};

use crate::{Ohlcv, bucket_start};

/// Streaming tick aggregator.
///
/// Aggregates ticks into OHLCV bars based on the configured timeframe,
/// holding at most one open bar at a time. Feed ticks in ascending
/// timestamp order; [`aggregate_ticks`] sorts a copy first and is the
/// entry point for unsorted input.
#[derive(Debug)]
pub struct TickAggregator {
    timeframe: Timeframe,
    current_bar: Option<OhlcvBuilder>,
}

impl TickAggregator {
    /// Creates a new aggregator for the given timeframe.
    #[must_use]
    pub const fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            current_bar: None,
        }
    }

    /// Returns the timeframe being aggregated to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Processes a tick, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when the tick falls outside the open bar's
    /// bucket and closes it, `None` otherwise.
    pub fn process(&mut self, tick: Tick) -> Option<Ohlcv> {
        let bar_start = self.bar_start_for(tick.timestamp);

        match self.current_bar.take() {
            Some(mut builder) if builder.timestamp == bar_start => {
                builder.update(&tick);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = builder.finish();
                self.current_bar = Some(OhlcvBuilder::new(bar_start, &tick));
                Some(completed)
            }
            None => {
                self.current_bar = Some(OhlcvBuilder::new(bar_start, &tick));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial bar.
    ///
    /// End of input is the only flush trigger; there is no sentinel.
    #[must_use]
    pub fn finish(self) -> Option<Ohlcv> {
        self.current_bar.map(OhlcvBuilder::finish)
    }

    /// Calculates the bucket start for a given timestamp.
    fn bar_start_for(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        match self.timeframe.minutes() {
            Some(minutes) => bucket_start(timestamp, minutes),
            // Tick timeframe: every record is its own bucket.
            None => timestamp,
        }
    }
}

/// Open-aggregate state for a bar under construction.
#[derive(Debug)]
struct OhlcvBuilder {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    tick_count: u32,
    spread: f64,
}

impl OhlcvBuilder {
    /// Seeds a builder from the first tick of a bucket.
    fn new(timestamp: DateTime<Utc>, tick: &Tick) -> Self {
        let mid = tick.mid();
        Self {
            timestamp,
            open: mid,
            high: mid,
            low: mid,
            close: mid,
            volume: tick.mid_volume(),
            tick_count: 1,
            spread: tick.spread(),
        }
    }

    /// Updates the builder with a new tick.
    fn update(&mut self, tick: &Tick) {
        let mid = tick.mid();
        self.high = self.high.max(mid);
        self.low = self.low.min(mid);
        self.close = mid;
        self.volume += tick.mid_volume();
        self.tick_count += 1;
        // Running mean, n = post-increment count. Downstream consumers
        // depend on this exact recurrence being reproducible bit-for-bit;
        // do not rearrange it into a closed form.
        let n = f64::from(self.tick_count);
        self.spread = (self.spread * (n - 1.0) + tick.spread()) / n;
    }

    /// Finishes building and returns the OHLCV bar.
    const fn finish(self) -> Ohlcv {
        Ohlcv::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.tick_count,
            self.spread,
        )
    }
}

/// Aggregates a tick slice into OHLCV bars at the given timeframe.
///
/// The input need not be sorted; a local copy is sorted by ascending
/// timestamp before bucketing (tie order between equal timestamps is
/// unspecified). Empty input yields empty output. Output bars are strictly
/// ascending in bucket start with no duplicates; buckets without ticks are
/// not synthesized.
#[must_use]
pub fn aggregate_ticks(ticks: &[Tick], timeframe: Timeframe) -> Vec<Ohlcv> {
    let mut sorted = ticks.to_vec();
    sorted.sort_unstable_by_key(|t| t.timestamp);

    let mut aggregator = TickAggregator::new(timeframe);
    let mut bars = Vec::new();

    for tick in sorted {
        if let Some(bar) = aggregator.process(tick) {
            bars.push(bar);
        }
    }

    if let Some(bar) = aggregator.finish() {
        bars.push(bar);
    }

    bars
}
