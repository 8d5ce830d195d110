//! Statistics engine over a tick window.

use candela_types::{Result, Tick, TimeRange};

use crate::{DistributionSummary, ReturnsSummary, StatisticsReport};

/// Computes distributional statistics over a tick window.
///
/// Unlike the aggregation engine, this engine never re-sorts its input:
/// spreads, mid prices and returns are derived in input order, and the
/// reported time range is the first/last element by position. Callers that
/// want chronological returns must supply chronologically ordered ticks.
///
/// Returns `Ok(None)` for an empty window (no data is not an error).
///
/// # Errors
///
/// Fails atomically with `InsufficientData` when the returns series is
/// shorter than the minimum sample of any of its moments: a full report
/// needs at least 5 ticks (4 returns) so that excess kurtosis is defined.
pub fn compute_statistics(ticks: &[Tick]) -> Result<Option<StatisticsReport>> {
    if ticks.is_empty() {
        return Ok(None);
    }

    let spreads: Vec<f64> = ticks.iter().map(Tick::spread).collect();
    let mids: Vec<f64> = ticks.iter().map(Tick::mid).collect();
    let returns: Vec<f64> = mids.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();

    let report = StatisticsReport {
        tick_count: ticks.len(),
        time_range: TimeRange::new(
            ticks[0].timestamp,
            ticks[ticks.len() - 1].timestamp,
        ),
        spread: DistributionSummary::from_values(&spreads)?,
        price: DistributionSummary::from_values(&mids)?,
        returns: ReturnsSummary::from_values(&returns)?,
    };

    Ok(Some(report))
}
