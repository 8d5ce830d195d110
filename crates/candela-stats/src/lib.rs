//! Distribution statistics for the candela toolkit.
//!
//! This crate computes summary statistics over a tick window:
//!
//! - [`moments`] - Mean, population standard deviation, skewness, kurtosis
//! - [`DistributionSummary`] - Min/max/mean/std of a value series
//! - [`ReturnsSummary`] - Moment statistics of the simple-returns series
//! - [`StatisticsReport`] / [`compute_statistics`] - The full report

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod moments;
mod report;
mod statistics;

pub use report::{DistributionSummary, ReturnsSummary, StatisticsReport};
pub use statistics::compute_statistics;
