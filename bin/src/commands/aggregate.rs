//! Aggregate command implementation.
//!
//! Reads a tick file, buckets it into OHLCV bars at the requested timeframe
//! and writes the bars out in the chosen format. The `tick` timeframe is a
//! pass-through: ticks are written back out unaggregated.

use crate::display::{
    Format, confirm_overwrite, default_output_path, read_ticks_file, spinner, write_ohlcv,
    write_ticks,
};
use anyhow::{Context, Result};
use candela_lib::prelude::*;
use std::path::{Path, PathBuf};

/// Aggregate a tick file into OHLCV bars.
pub(crate) fn aggregate(
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

    let output =
        output.unwrap_or_else(|| default_output_path(input, &timeframe.to_string(), format));

    if !confirm_overwrite(&output, yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let progress = spinner(quiet, format!("Reading {}", input.display()));
    let ticks = read_ticks_file(input)?;
    progress.set_message(format!("Aggregating {} ticks", ticks.len()));

    if timeframe.is_tick() {
        // Raw pass-through, no aggregation.
        write_ticks(&ticks, &output, format)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        progress.finish_with_message(format!("Wrote {} ticks", ticks.len()));
    } else {
        let bars = aggregate_ticks(&ticks, timeframe);
        write_ohlcv(&bars, &output, format)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        progress.finish_with_message(format!(
            "Aggregated {} ticks into {} {} bars",
            ticks.len(),
            bars.len(),
            timeframe
        ));
    }

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
