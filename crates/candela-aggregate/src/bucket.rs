//! Epoch-aligned time bucket computation.

use chrono::{DateTime, TimeZone, Utc};

/// Returns the start of the bucket containing `timestamp` for the given
/// interval.
///
/// Buckets are aligned to epoch zero: the boundary is
/// `floor(ms / interval_ms) * interval_ms` on milliseconds since epoch,
/// independent of any calendar or timezone. Pre-epoch instants floor toward
/// minus infinity, so the result is always `<= timestamp`.
#[must_use]
pub fn bucket_start(timestamp: DateTime<Utc>, interval_minutes: u32) -> DateTime<Utc> {
    let interval_ms = i64::from(interval_minutes) * 60_000;
    let ms = timestamp.timestamp_millis();
    let bucket_ms = ms.div_euclid(interval_ms) * interval_ms;
    Utc.timestamp_millis_opt(bucket_ms).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(secs * 1000).unwrap()
    }

    #[test]
    fn test_floor_to_minute() {
        assert_eq!(bucket_start(instant(0), 1), instant(0));
        assert_eq!(bucket_start(instant(30), 1), instant(0));
        assert_eq!(bucket_start(instant(59), 1), instant(0));
        assert_eq!(bucket_start(instant(90), 1), instant(60));
    }

    #[test]
    fn test_five_minute_buckets() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 14, 37, 45).unwrap();
        let start = bucket_start(dt, 5);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 15, 14, 35, 0).unwrap());
    }

    #[test]
    fn test_day_buckets_are_epoch_aligned() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 14, 37, 45).unwrap();
        let start = bucket_start(dt, 1440);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        // 86_400_000 divides the boundary exactly.
        assert_eq!(start.timestamp_millis() % 86_400_000, 0);
    }

    #[test]
    fn test_never_exceeds_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 14, 37, 45).unwrap()
            + TimeDelta::milliseconds(123);
        for minutes in [1, 5, 15, 30, 60, 240, 1440] {
            assert!(bucket_start(dt, minutes) <= dt);
        }
    }

    #[test]
    fn test_idempotent() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 14, 37, 45).unwrap();
        for minutes in [1, 5, 15, 30, 60, 240, 1440] {
            let once = bucket_start(dt, minutes);
            assert_eq!(bucket_start(once, minutes), once);
        }
    }

    #[test]
    fn test_pre_epoch_floors_downward() {
        // -30s floors to -60s, not to 0.
        assert_eq!(bucket_start(instant(-30), 1), instant(-60));
    }
}
