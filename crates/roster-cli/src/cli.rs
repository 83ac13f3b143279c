//! CLI argument definitions for the roster converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Convert people files into normalized user records",
    long_about = "Convert a people file (CSV, spreadsheet, JSON, or SQL insert dump) into\n\
                  normalized user records.\n\n\
                  Columns are matched to fullName, email, nationalId, role, and birthDate\n\
                  by header synonyms. Complete rows are accepted and written as JSON;\n\
                  incomplete rows are reported with the fields that failed."
)]
pub struct Cli {
    /// File to convert (.csv, .xlsx, .xls, .xlsm, .ods, .json, .sql).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write accepted records to this file.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "converted_users.json",
        conflicts_with_all = ["output_dir", "no_artifact"]
    )]
    pub output: PathBuf,

    /// Write accepted records to a uniquely named file in this directory.
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "no_artifact")]
    pub output_dir: Option<PathBuf>,

    /// Do not write accepted records anywhere.
    #[arg(long = "no-artifact")]
    pub no_artifact: bool,

    /// JSON file with extra header synonyms and role labels.
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Print the full result set as JSON instead of summary tables.
    #[arg(long = "json")]
    pub json: bool,

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

    /// Allow row values (names, emails, identifiers) in trace logs.
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
