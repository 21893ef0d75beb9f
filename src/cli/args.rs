use super::parse::parse_algorithm;
use clap::Args;
use routefind_core::graph::Algorithm;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Read the problem from a file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Algorithm to run (repeatable; order is kept). Defaults to bfs, dfs, ucs
    #[arg(long = "algorithm", short = 'a', value_parser = parse_algorithm, action = clap::ArgAction::Append)]
    pub algorithms: Vec<Algorithm>,

    /// Override the start label from the input
    #[arg(long)]
    pub from: Option<String>,

    /// Override the goal label from the input
    #[arg(long)]
    pub to: Option<String>,
}
