//! CLI argument definitions for the application-form validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "appform",
    version,
    about = "Application form validator - replay form events and check conditional validation",
    long_about = "Replay a scripted sequence of form events (field input, expertise\n\
                  selection, job-searching toggle, submit) against the validation\n\
                  engine and report the resulting field errors and submission JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow entered field values in logs.
    ///
    /// Entered values are personal data (names, email addresses) and are
    /// replaced with a redaction token by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a JSON event script against a fresh form.
    Replay(ReplayArgs),

    /// List all form fields and their always-on validators.
    Fields,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Path to the JSON event script.
    #[arg(value_name = "EVENTS_FILE")]
    pub events_file: PathBuf,

    /// Write the validation report JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Write the submission snapshot JSON to this path.
    ///
    /// Skipped with a warning when the script never submits successfully.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
