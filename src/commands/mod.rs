//! CLI commands for routefind

pub mod dispatch;
pub mod inspect;
pub mod search;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use routefind_core::error::{Result, RouteError};
use routefind_core::input::{read_problem, Problem};
use routefind_core::trace_time;

/// Load the problem from `path`, or from stdin when no path is given
pub fn load_problem(path: Option<&Path>) -> Result<Problem> {
    let start = Instant::now();

    let problem = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                RouteError::Other(format!("failed to open {}: {}", path.display(), e))
            })?;
            read_problem(BufReader::new(file))?
        }
        None => read_problem(std::io::stdin().lock())?,
    };

    trace_time!(
        start,
        "load_problem",
        nodes = problem.graph.node_count(),
        edges = problem.graph.edge_count()
    );
    Ok(problem)
}
