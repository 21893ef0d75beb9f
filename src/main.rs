//! Routefind - uninformed graph search CLI
//!
//! Reads a weighted undirected graph plus a start/goal pair and reports the
//! paths found by breadth-first, depth-first and uniform-cost search.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use routefind_core::config::GlobalConfig;
use routefind_core::error::{ExitCode as RouteExitCode, RouteError};
use routefind_core::format::OutputFormat;
use routefind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `--format` is known; honor a JSON request anyway
            if argv_format_json {
                let route_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        RouteError::UsageError(err.to_string())
                    }
                    _ => RouteError::Other(err.to_string()),
                };

                eprintln!("{}", route_error.to_json());
                return ExitCode::from(route_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match GlobalConfig::load() {
        Ok(config) => config,
        Err(e) => return fail(&cli, &e, cli.format.unwrap_or_default()),
    };
    let format = config.resolve_format(cli.format);

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => fail(&cli, &e, format),
    }
}

fn fail(cli: &Cli, e: &RouteError, format: OutputFormat) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
