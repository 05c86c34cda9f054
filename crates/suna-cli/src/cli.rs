//! CLI argument definitions for the `suna` log decoder.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use suna_cli::decode::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(
    name = "suna",
    version,
    about = "Decode SUNA nitrate sensor logs into JSON records",
    long_about = "Decode SUNA nitrate sensor sample frames into typed records.\n\n\
                  Accepts frames relayed by a data logger (with a date/time prefix)\n\
                  and frames recovered directly from the instrument."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a log file into JSON lines.
    Decode(DecodeArgs),

    /// Print the field layout of a decoded record.
    Layout,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Log file to decode.
    #[arg(value_name = "LOG")]
    pub log: PathBuf,

    /// Write records to this file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Records requested from the decoder per batch.
    #[arg(long = "batch-size", value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: NonZeroUsize,

    /// Write the run summary, including every issue, as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Skip the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Exit with status 2 if any line was skipped or any field failed to decode.
    #[arg(long = "strict")]
    pub strict: bool,
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
