//! Roster converter CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use roster_cli::commands::{ConvertRequest, run_convert};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_core::ArtifactTarget;
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

    let request = request_from_cli(&cli);
    let exit_code = match run_convert(&request) {
        Ok(conversion) => {
            if cli.json {
                match serde_json::to_string_pretty(&conversion.result) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error}");
                        1
                    }
                }
            } else {
                print_summary(&request.input, &conversion);
                0
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn request_from_cli(cli: &Cli) -> ConvertRequest {
    let artifact = if cli.no_artifact {
        ArtifactTarget::Disabled
    } else if let Some(dir) = &cli.output_dir {
        ArtifactTarget::UniqueIn(dir.clone())
    } else {
        ArtifactTarget::Path(cli.output.clone())
    };
    ConvertRequest {
        input: cli.file.clone(),
        artifact,
        vocabulary: cli.vocabulary.clone(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log-level` beats `-v`/`-q`, which beat `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit_level = match cli.log_level {
        Some(LogLevelArg::Error) => Some(LevelFilter::ERROR),
        Some(LogLevelArg::Warn) => Some(LevelFilter::WARN),
        Some(LogLevelArg::Info) => Some(LevelFilter::INFO),
        Some(LogLevelArg::Debug) => Some(LevelFilter::DEBUG),
        Some(LogLevelArg::Trace) => Some(LevelFilter::TRACE),
        None if cli.verbosity.is_present() => Some(cli.verbosity.tracing_level_filter()),
        None => None,
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let config = LogConfig::default()
        .with_format(format)
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    match explicit_level {
        Some(level) => config.with_level_filter(level),
        None => config,
    }
}
