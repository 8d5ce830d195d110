//! OHLCV aggregation for the candela toolkit.
//!
//! This crate converts tick streams into time-bucketed OHLCV bars and
//! resamples bars into coarser bars:
//!
//! - [`bucket_start`] - Epoch-aligned bucket boundary computation
//! - [`Ohlcv`] - OHLCV bar data structure
//! - [`TickAggregator`] / [`aggregate_ticks`] - Tick-to-bar aggregation
//! - [`BarAggregator`] / [`resample_bars`] - Bar-to-coarser-bar resampling

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod bucket;
mod ohlcv;
mod resample;

pub use aggregator::{TickAggregator, aggregate_ticks};
pub use bucket::bucket_start;
pub use ohlcv::Ohlcv;
pub use resample::{BarAggregator, resample_bars};
