//! Tick aggregation and distribution statistics library.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use candela_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! let ticks = vec![
//!     Tick::new(base, 1.1001, 1.1000, Some(100.0), Some(100.0)),
//!     Tick::new(base + chrono::TimeDelta::seconds(30), 1.1005, 1.1003, None, None),
//! ];
//!
//! let timeframe: Timeframe = "1m".parse().unwrap();
//! let bars = aggregate_ticks(&ticks, timeframe);
//! assert_eq!(bars.len(), 1);
//! assert_eq!(bars[0].tick_count, 2);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use candela_aggregate::{
    BarAggregator, Ohlcv, TickAggregator, aggregate_ticks, bucket_start, resample_bars,
};

// Re-export statistics
#[cfg(feature = "stats")]
pub use candela_stats::{
    DistributionSummary, ReturnsSummary, StatisticsReport, compute_statistics, moments,
};

// Re-export formatters and readers
#[cfg(feature = "format")]
pub use candela_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, reader,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use candela_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{
        CandelaError, IntervalUnit, Result, Tick, TimeRange, Timeframe,
    };

    #[cfg(feature = "aggregate")]
    pub use candela_aggregate::{
        BarAggregator, Ohlcv, TickAggregator, aggregate_ticks, bucket_start, resample_bars,
    };

    #[cfg(feature = "stats")]
    pub use candela_stats::{
        DistributionSummary, ReturnsSummary, StatisticsReport, compute_statistics,
    };

    #[cfg(feature = "format")]
    pub use candela_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use candela_format::ParquetFormatter;
}
