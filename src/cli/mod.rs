//! CLI argument parsing for routefind
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::SearchArgs;
use parse::parse_format;
use routefind_core::format::OutputFormat;

/// Routefind - uninformed graph search over weighted road maps
#[derive(Parser, Debug)]
#[command(name = "routefind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records [default: config, then human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true, env = "ROUTEFIND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run BFS, DFS and UCS between the start and goal labels (default)
    Search(SearchArgs),

    /// Show the loaded graph's nodes, edge count and adjacency lists
    Inspect {
        /// Read the problem from a file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}
