//! Core types for the candela tick aggregation toolkit.
//!
//! This crate provides the fundamental data structures shared across the
//! candela workspace:
//!
//! - [`Tick`] - A single bid/ask price observation with optional volumes
//! - [`Timeframe`] - Aggregation interval parsed from a `<count><unit>` token
//! - [`TimeRange`] - First/last instant pair of a data window
//! - [`CandelaError`] - Shared error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod tick;
mod time_range;
mod timeframe;

pub use error::{CandelaError, Result};
pub use tick::Tick;
pub use time_range::TimeRange;
pub use timeframe::{IntervalUnit, Timeframe};
