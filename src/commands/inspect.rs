//! Inspect command
use std::path::Path;
use std::time::Instant;

use routefind_core::error::Result;
use routefind_core::format::{render_graph, OutputFormat};

use super::load_problem;

/// Execute the inspect command
pub fn execute(format: OutputFormat, input: Option<&Path>, start: Instant) -> Result<()> {
    let problem = load_problem(input)?;

    tracing::debug!(
        elapsed = ?start.elapsed(),
        start_label = %problem.start,
        goal_label = %problem.goal,
        "inspect"
    );

    print!("{}", render_graph(format, &problem.graph)?);
    Ok(())
}
