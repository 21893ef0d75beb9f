//! Command dispatch logic for routefind
use std::time::Instant;

use crate::cli::{Cli, Commands, SearchArgs};
use crate::commands;
use routefind_core::config::GlobalConfig;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;

pub fn run(cli: &Cli, config: &GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    match &cli.command {
        // Bare invocation behaves like the classic tool: read stdin, run everything
        None => commands::search::execute(cli, config, format, &SearchArgs::default(), start),

        Some(Commands::Search(args)) => {
            commands::search::execute(cli, config, format, args, start)
        }

        Some(Commands::Inspect { input }) => {
            commands::inspect::execute(format, input.as_deref(), start)
        }
    }
}
