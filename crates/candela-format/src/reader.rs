//! Input decoding of tick and bar files.
//!
//! The readers accept the same shapes the formatters write: CSV with an
//! optional header row, a JSON array, or NDJSON. Decoding happens at this
//! boundary only; the engines assume valid records on entry.

use candela_aggregate::Ohlcv;
use candela_types::Tick;
use chrono::{DateTime, Utc};
use std::io::BufRead;

use crate::{FormatError, OutputFormat};

/// Reads ticks from the given input in the given format.
///
/// # Errors
///
/// Returns a [`FormatError`] on I/O failure or malformed records. Parquet
/// input is not supported.
pub fn read_ticks<R: BufRead>(reader: R, format: OutputFormat) -> Result<Vec<Tick>, FormatError> {
    match format {
        OutputFormat::Csv => read_csv(reader, parse_tick_row),
        OutputFormat::Json => Ok(serde_json::from_reader(reader)?),
        OutputFormat::Ndjson => read_ndjson(reader),
        OutputFormat::Parquet => Err(FormatError::Parquet(
            "Parquet input is not supported".to_string(),
        )),
    }
}

/// Reads OHLCV bars from the given input in the given format.
///
/// # Errors
///
/// Returns a [`FormatError`] on I/O failure or malformed records. Parquet
/// input is not supported.
pub fn read_ohlcv<R: BufRead>(reader: R, format: OutputFormat) -> Result<Vec<Ohlcv>, FormatError> {
    match format {
        OutputFormat::Csv => read_csv(reader, parse_ohlcv_row),
        OutputFormat::Json => Ok(serde_json::from_reader(reader)?),
        OutputFormat::Ndjson => read_ndjson(reader),
        OutputFormat::Parquet => Err(FormatError::Parquet(
            "Parquet input is not supported".to_string(),
        )),
    }
}

/// Reads newline-delimited JSON records.
fn read_ndjson<R: BufRead, T: serde::de::DeserializeOwned>(
    reader: R,
) -> Result<Vec<T>, FormatError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .map_err(|e| FormatError::Parse(format!("line {}: {e}", index + 1)))?;
        records.push(record);
    }
    Ok(records)
}

/// Reads comma-separated records, skipping an optional header row.
fn read_csv<R: BufRead, T>(
    reader: R,
    parse_row: fn(&[&str], usize) -> Result<T, FormatError>,
) -> Result<Vec<T>, FormatError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if index == 0 && trimmed.starts_with("timestamp") {
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').collect();
        records.push(parse_row(&fields, index + 1)?);
    }
    Ok(records)
}

fn parse_tick_row(fields: &[&str], line: usize) -> Result<Tick, FormatError> {
    if fields.len() != 5 {
        return Err(FormatError::Parse(format!(
            "line {line}: expected 5 tick fields, got {}",
            fields.len()
        )));
    }

    Ok(Tick::new(
        parse_timestamp(fields[0], line)?,
        parse_f64(fields[1], "ask", line)?,
        parse_f64(fields[2], "bid", line)?,
        parse_optional_f64(fields[3], "ask_volume", line)?,
        parse_optional_f64(fields[4], "bid_volume", line)?,
    ))
}

fn parse_ohlcv_row(fields: &[&str], line: usize) -> Result<Ohlcv, FormatError> {
    if fields.len() != 8 {
        return Err(FormatError::Parse(format!(
            "line {line}: expected 8 bar fields, got {}",
            fields.len()
        )));
    }

    Ok(Ohlcv::new(
        parse_timestamp(fields[0], line)?,
        parse_f64(fields[1], "open", line)?,
        parse_f64(fields[2], "high", line)?,
        parse_f64(fields[3], "low", line)?,
        parse_f64(fields[4], "close", line)?,
        parse_f64(fields[5], "volume", line)?,
        fields[6].parse().map_err(|_| {
            FormatError::Parse(format!("line {line}: invalid tick_count '{}'", fields[6]))
        })?,
        parse_f64(fields[7], "spread", line)?,
    ))
}

fn parse_timestamp(field: &str, line: usize) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(field)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FormatError::Parse(format!("line {line}: invalid timestamp '{field}': {e}")))
}

fn parse_f64(field: &str, name: &str, line: usize) -> Result<f64, FormatError> {
    field
        .parse()
        .map_err(|_| FormatError::Parse(format!("line {line}: invalid {name} '{field}'")))
}

fn parse_optional_f64(field: &str, name: &str, line: usize) -> Result<Option<f64>, FormatError> {
    if field.is_empty() {
        return Ok(None);
    }
    parse_f64(field, name, line).map(Some)
}
