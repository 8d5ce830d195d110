//! Stats command implementation.

use crate::display::{confirm_overwrite, read_ticks_file, spinner};
use anyhow::{Context, Result};
use candela_lib::prelude::*;
use std::path::{Path, PathBuf};

/// Compute distribution statistics over a tick file.
pub(crate) fn stats(
    input: &Path,
    json: bool,
    output: Option<PathBuf>,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    let progress = spinner(quiet, format!("Reading {}", input.display()));
    let ticks = read_ticks_file(input)?;
    progress.set_message(format!("Computing statistics over {} ticks", ticks.len()));

    let report = compute_statistics(&ticks)?;
    progress.finish_and_clear();

    let Some(report) = report else {
        println!("No ticks in {}", input.display());
        return Ok(());
    };

    let rendered = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.format_summary()
    };

    match output {
        Some(path) => {
            if !confirm_overwrite(&path, yes)? {
                println!("Aborted.");
                return Ok(());
            }
            std::fs::write(&path, rendered + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                println!("Report written to: {}", path.display());
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
