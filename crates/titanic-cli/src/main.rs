//! Passenger feature converter CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use titanic_cli::logging::{LogConfig, LogFormat, init_logging};
use titanic_cli::pipeline::{ConvertOptions, run_conversion};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = ConvertOptions {
        dry_run: cli.dry_run,
    };
    let exit_code = match run_conversion(&cli.input, options) {
        Ok(result) => {
            if !cli.no_summary {
                print_summary(&result);
            }
            0
        }
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "conversion failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
///
/// An explicit `--log-level` wins over `-v`/`-q`; `RUST_LOG` is only honored
/// when neither is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_timestamps: cli.log_timestamps,
        with_target: cli.log_target,
        with_ansi,
        format,
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
    }
}
