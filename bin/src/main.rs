//! candela CLI - Tick aggregation and distribution statistics toolkit.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Tick aggregation and distribution statistics toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a tick file into OHLCV bars
    Aggregate {
        /// Input tick file (csv, json or ndjson)
        input: PathBuf,

        /// Aggregation timeframe, e.g. 1m, 5m, 1h, 1d; "tick" passes ticks
        /// through unaggregated
        #[arg(short, long)]
        timeframe: String,

        /// Output file path. Defaults to <input stem>_<timeframe>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Overwrite the output file without asking
        #[arg(long)]
        yes: bool,
    },

    /// Resample an OHLCV bar file into a coarser timeframe
    Resample {
        /// Input bar file (csv, json or ndjson)
        input: PathBuf,

        /// Target timeframe, e.g. 15m, 1h, 1d
        #[arg(short, long)]
        timeframe: String,

        /// Output file path. Defaults to <input stem>_<timeframe>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Overwrite the output file without asking
        #[arg(long)]
        yes: bool,
    },

    /// Compute distribution statistics over a tick file
    Stats {
        /// Input tick file (csv, json or ndjson)
        input: PathBuf,

        /// Emit the report as pretty-printed JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file without asking
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Aggregate {
            input,
            timeframe,
            output,
            format,
            yes,
        } => commands::aggregate::aggregate(&input, &timeframe, output, format, yes, cli.quiet),
        Commands::Resample {
            input,
            timeframe,
            output,
            format,
            yes,
        } => commands::resample::resample(&input, &timeframe, output, format, yes, cli.quiet),
        Commands::Stats {
            input,
            json,
            output,
            yes,
        } => commands::stats::stats(&input, json, output, yes, cli.quiet),
    }
}
