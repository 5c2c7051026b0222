//! CLI argument definitions for the feature converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "titanic-features",
    version,
    about = "Convert a passenger CSV file into a numeric feature file",
    long_about = "Convert a passenger CSV file into a numeric feature file.\n\n\
                  The output is written next to the input with a .txt extension,\n\
                  one line of seven space-separated values per data row.\n\
                  A file named train.csv is read as labelled training data;\n\
                  any other name is read as inference data keyed by passenger id."
)]
pub struct Cli {
    /// Passenger CSV file (first line is a header).
    #[arg(value_name = "INPUT", value_parser = existing_file)]
    pub input: PathBuf,

    /// Parse and encode every row without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not print the summary table after a successful run.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Include passenger values in trace-level row logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("Invalid file: {value}"))
    }
}
