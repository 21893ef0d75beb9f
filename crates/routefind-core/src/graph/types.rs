use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge weight. Non-negative by construction, which uniform-cost search relies on.
pub type Weight = u64;

/// Dense index of a node, allocated in order of first appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One directed half of an undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

/// Accumulated cost of a path from the search start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PathCost(u64);

impl PathCost {
    pub const ZERO: PathCost = PathCost(0);

    pub fn new(cost: u64) -> Self {
        PathCost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add<Weight> for PathCost {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        PathCost(self.0.saturating_add(weight))
    }
}

impl From<u64> for PathCost {
    fn from(cost: u64) -> Self {
        PathCost(cost)
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search (fewest edges)
    Bfs,
    /// Depth-first search (any path)
    Dfs,
    /// Uniform-cost search (least total weight)
    Ucs,
}

impl Algorithm {
    /// Run order used when nothing else is requested
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
        }
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" | "dijkstra" => Ok(Algorithm::Ucs),
            other => Err(RouteError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single search between two labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub algorithm: Algorithm,
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Labels from `from` to `to` inclusive; empty when not found
    pub nodes: Vec<String>,
    /// Number of edges on the path
    pub path_length: usize,
    /// Only reported by uniform-cost search, and only when a path exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<PathCost>,
    /// Nodes taken off the frontier before the search stopped
    pub expanded: usize,
}

impl PathResult {
    pub(crate) fn not_found(algorithm: Algorithm, from: &str, to: &str, expanded: usize) -> Self {
        PathResult {
            algorithm,
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            nodes: Vec::new(),
            path_length: 0,
            total_cost: None,
            expanded,
        }
    }

    pub(crate) fn found(
        algorithm: Algorithm,
        from: &str,
        to: &str,
        nodes: Vec<String>,
        total_cost: Option<PathCost>,
        expanded: usize,
    ) -> Self {
        PathResult {
            algorithm,
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            path_length: nodes.len().saturating_sub(1),
            nodes,
            total_cost,
            expanded,
        }
    }
}
