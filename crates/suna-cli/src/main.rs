//! SUNA log decoder CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use suna_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;
use tracing::warn;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, DecodeArgs, LogFormatArg, LogLevelArg};
use crate::commands::{run_decode, run_layout};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Decode(args) => decode(&args),
        Command::Layout => match run_layout() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Decode, print the summary, and pick the exit code.
///
/// Records are on stdout (or in `--output`) before the summary is printed,
/// so a strict failure still leaves the decoded output behind.
fn decode(args: &DecodeArgs) -> i32 {
    let summary = match run_decode(args) {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    if !args.no_summary {
        print_summary(&summary);
    }
    let code = summary.exit_code(args.strict);
    if code != 0 {
        warn!(
            malformed = summary.malformed_lines,
            issues = summary.issues.len(),
            "strict decode found damaged lines"
        );
    }
    code
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
