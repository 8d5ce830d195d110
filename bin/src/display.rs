//! Display utilities and file I/O helpers for the candela CLI.

use anyhow::{Context, Result, bail};
use candela_lib::prelude::*;
use candela_lib::reader;
use clap::ValueEnum;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Output format for processed data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Infers the input format from a file extension.
pub(crate) fn input_format(path: &Path) -> Result<OutputFormat> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
        "parquet" | "pq" => bail!("Parquet input is not supported"),
        _ => bail!(
            "Cannot infer input format of {} (expected .csv, .json or .ndjson)",
            path.display()
        ),
    }
}

/// Reads ticks from a file, inferring the format from its extension.
pub(crate) fn read_ticks_file(path: &Path) -> Result<Vec<Tick>> {
    let format = input_format(path)?;
    let file =
        File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    reader::read_ticks(BufReader::new(file), format)
        .with_context(|| format!("Failed to decode ticks from {}", path.display()))
}

/// Reads OHLCV bars from a file, inferring the format from its extension.
pub(crate) fn read_ohlcv_file(path: &Path) -> Result<Vec<Ohlcv>> {
    let format = input_format(path)?;
    let file =
        File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    reader::read_ohlcv(BufReader::new(file), format)
        .with_context(|| format!("Failed to decode bars from {}", path.display()))
}

/// Write ticks to a file in the specified format.
pub(crate) fn write_ticks(ticks: &[Tick], output: &PathBuf, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_ticks(ticks, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_ticks(ticks, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_ticks(ticks, writer)?;
        }
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                let formatter = ParquetFormatter::new();
                formatter.write_ticks(ticks, writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                bail!("Parquet support not compiled in");
            }
        }
    }

    Ok(())
}

/// Write OHLCV bars to a file in the specified format.
pub(crate) fn write_ohlcv(bars: &[Ohlcv], output: &PathBuf, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_ohlcv(bars, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_ohlcv(bars, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_ohlcv(bars, writer)?;
        }
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                let formatter = ParquetFormatter::new();
                formatter.write_ohlcv(bars, writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                bail!("Parquet support not compiled in");
            }
        }
    }

    Ok(())
}

/// Default output path: `<input stem>_<timeframe>.<format extension>`.
pub(crate) fn default_output_path(input: &Path, timeframe: &str, format: Format) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_{timeframe}.{}", format.extension()))
}

/// Asks before overwriting an existing output file, unless `yes` is set.
pub(crate) fn confirm_overwrite(path: &Path, yes: bool) -> Result<bool> {
    if yes || !path.exists() {
        return Ok(true);
    }

    let confirmed = inquire::Confirm::new(&format!("{} exists, overwrite?", path.display()))
        .with_default(false)
        .prompt()?;
    Ok(confirmed)
}

/// Creates a spinner for file-processing feedback, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
