//! Moment statistics over a value series.
//!
//! The standard deviation here is the population form (divide by `n`).
//! That choice is load-bearing: the skewness and kurtosis formulas below
//! standardize by this same deviation and their sample-adjustment factors
//! are calibrated against it.

use candela_types::{CandelaError, Result};

/// Returns the arithmetic mean of the series.
///
/// # Errors
///
/// Fails with [`CandelaError::InsufficientData`] on an empty series.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CandelaError::InsufficientData {
            statistic: "mean",
            required: 1,
            actual: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Returns the population standard deviation of the series.
///
/// # Errors
///
/// Fails with [`CandelaError::InsufficientData`] on an empty series.
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Returns the Fisher-Pearson adjusted sample skewness.
///
/// `(n / ((n-1)(n-2))) * sum(((x - mean) / std)^3)`, standardized by the
/// population deviation.
///
/// # Errors
///
/// Fails with [`CandelaError::InsufficientData`] for fewer than 3 values.
pub fn skewness(values: &[f64]) -> Result<f64> {
    let n = values.len();
    if n < 3 {
        return Err(CandelaError::InsufficientData {
            statistic: "skewness",
            required: 3,
            actual: n,
        });
    }

    let m = mean(values)?;
    let s = std_dev(values)?;
    let n = n as f64;

    let sum = values.iter().map(|v| ((v - m) / s).powi(3)).sum::<f64>();
    Ok(n / ((n - 1.0) * (n - 2.0)) * sum)
}

/// Returns the sample-adjusted excess kurtosis.
///
/// `(n(n+1) / ((n-1)(n-2)(n-3))) * sum(((x - mean) / std)^4)
///  - 3(n-1)^2 / ((n-2)(n-3))`, standardized by the population deviation;
/// a normal distribution scores 0.
///
/// # Errors
///
/// Fails with [`CandelaError::InsufficientData`] for fewer than 4 values.
pub fn excess_kurtosis(values: &[f64]) -> Result<f64> {
    let n = values.len();
    if n < 4 {
        return Err(CandelaError::InsufficientData {
            statistic: "kurtosis",
            required: 4,
            actual: n,
        });
    }

    let m = mean(values)?;
    let s = std_dev(values)?;
    let n = n as f64;

    let sum = values.iter().map(|v| ((v - m) / s).powi(4)).sum::<f64>();
    let adjusted = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * sum;
    let correction = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    Ok(adjusted - correction)
}
