//! Resample command implementation.

use crate::display::{
    Format, confirm_overwrite, default_output_path, read_ohlcv_file, spinner, write_ohlcv,
};
use anyhow::{Context, Result, bail};
use candela_lib::prelude::*;
use std::path::{Path, PathBuf};

/// Resample an OHLCV bar file into a coarser timeframe.
pub(crate) fn resample(
    input: &Path,
    timeframe_str: &str,
    output: Option<PathBuf>,
    format: Format,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    let timeframe: Timeframe = timeframe_str
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if timeframe.is_tick() {
        bail!("Resampling requires an interval timeframe such as 15m or 1h");
    }

    let output =
        output.unwrap_or_else(|| default_output_path(input, &timeframe.to_string(), format));

    if !confirm_overwrite(&output, yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let progress = spinner(quiet, format!("Reading {}", input.display()));
    let bars = read_ohlcv_file(input)?;
    progress.set_message(format!("Resampling {} bars", bars.len()));

    let merged = resample_bars(&bars, timeframe);
    write_ohlcv(&merged, &output, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    progress.finish_with_message(format!(
        "Resampled {} bars into {} {} bars",
        bars.len(),
        merged.len(),
        timeframe
    ));

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
