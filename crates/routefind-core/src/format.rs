//! Output format handling for routefind
//!
//! Supports three output formats:
//! - human: the classic per-algorithm text report
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for scripts and LLM context

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{Algorithm, Graph, PathResult};

/// Output format for routefind commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Results of one search run, with enough graph context to render any format
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub from: String,
    pub to: String,
    pub nodes: usize,
    pub edges: usize,
    pub results: Vec<PathResult>,
}

impl SearchReport {
    pub fn new(graph: &Graph, from: &str, to: &str, results: Vec<PathResult>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            results,
        }
    }
}

/// Render a search report in the requested format
pub fn render_report(format: OutputFormat, report: &SearchReport) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(&report.results)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Records => Ok(render_records(report)),
    }
}

/// Classic text report.
///
/// BFS and DFS paths print each label followed by a space. The UCS section
/// header keeps its trailing space and the cost follows the goal on a
/// `Total cost:` line, matching the long-standing output of this tool.
pub fn render_human(results: &[PathResult]) -> String {
    let mut out = String::new();

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match result.algorithm {
            Algorithm::Ucs => out.push_str("ucs output: \n"),
            other => {
                let _ = writeln!(out, "{other} output:");
            }
        }

        if !result.found {
            out.push_str("No path found\n");
            continue;
        }

        match (result.algorithm, result.total_cost) {
            (Algorithm::Ucs, Some(cost)) => {
                let _ = writeln!(out, "{}\nTotal cost: {}", result.nodes.join(" "), cost);
            }
            _ => {
                for label in &result.nodes {
                    out.push_str(label);
                    out.push(' ');
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Line-oriented records: one `H` header, then an `R` line per algorithm
/// followed by one `P` line per path node.
pub fn render_records(report: &SearchReport) -> String {
    let mut lines = vec![format!(
        "H routefind=1 records=1 mode=search from={} to={} nodes={} edges={}",
        report.from, report.to, report.nodes, report.edges
    )];

    for result in &report.results {
        let cost = result
            .total_cost
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "R {} found={} length={} cost={} expanded={}",
            result.algorithm, result.found, result.path_length, cost, result.expanded
        ));
        for label in &result.nodes {
            lines.push(format!("P {} {}", result.algorithm, label));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct NeighborEntry<'a> {
    to: &'a str,
    weight: u64,
}

#[derive(Serialize)]
struct AdjacencyEntry<'a> {
    label: &'a str,
    neighbors: Vec<NeighborEntry<'a>>,
}

/// Render the loaded graph's adjacency lists, in pinned iteration order
pub fn render_graph(format: OutputFormat, graph: &Graph) -> Result<String> {
    let adjacency: Vec<AdjacencyEntry<'_>> = graph
        .labels()
        .map(|label| AdjacencyEntry {
            label,
            neighbors: graph
                .neighbors_of(label)
                .into_iter()
                .map(|(to, weight)| NeighborEntry { to, weight })
                .collect(),
        })
        .collect();

    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "adjacency": adjacency,
            });
            out.push_str(&serde_json::to_string_pretty(&json)?);
            out.push('\n');
        }
        OutputFormat::Human => {
            let _ = writeln!(out, "nodes: {}", graph.node_count());
            let _ = writeln!(out, "edges: {}", graph.edge_count());
            for entry in &adjacency {
                let neighbors: Vec<String> = entry
                    .neighbors
                    .iter()
                    .map(|n| format!("{}({})", n.to, n.weight))
                    .collect();
                let _ = writeln!(out, "{}: {}", entry.label, neighbors.join(" "));
            }
        }
        OutputFormat::Records => {
            let _ = writeln!(
                out,
                "H routefind=1 records=1 mode=inspect nodes={} edges={}",
                graph.node_count(),
                graph.edge_count()
            );
            for entry in &adjacency {
                let _ = writeln!(out, "N {} degree={}", entry.label, entry.neighbors.len());
                for n in &entry.neighbors {
                    let _ = writeln!(out, "E {} {} {}", entry.label, n.to, n.weight);
                }
            }
        }
    }

    Ok(out)
}
