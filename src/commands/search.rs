//! Search command
use std::time::Instant;

use crate::cli::{Cli, SearchArgs};
use routefind_core::config::GlobalConfig;
use routefind_core::error::Result;
use routefind_core::format::{render_report, OutputFormat, SearchReport};

use super::load_problem;

/// Execute the search command
pub fn execute(
    cli: &Cli,
    config: &GlobalConfig,
    format: OutputFormat,
    args: &SearchArgs,
    start: Instant,
) -> Result<()> {
    let problem = load_problem(args.input.as_deref())?;
    let graph = &problem.graph;

    let from = args.from.as_deref().unwrap_or(&problem.start);
    let to = args.to.as_deref().unwrap_or(&problem.goal);

    if from != to {
        for label in [from, to] {
            if !graph.contains(label) {
                tracing::warn!(label, "label does not appear in any edge");
            }
        }
    }

    let algorithms = config.resolve_algorithms(&args.algorithms);
    let results = graph.search_all(&algorithms, from, to);

    if cli.verbose {
        for result in &results {
            tracing::debug!(
                algorithm = %result.algorithm,
                found = result.found,
                length = result.path_length,
                expanded = result.expanded,
                "search finished"
            );
        }
        tracing::debug!(elapsed = ?start.elapsed(), "search");
    }

    let report = SearchReport::new(graph, from, to, results);
    print!("{}", render_report(format, &report)?);
    Ok(())
}
