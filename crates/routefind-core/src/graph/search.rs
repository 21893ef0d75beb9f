use crate::graph::algos::{bfs_search, dfs_search, ucs_search, SearchOutcome};
use crate::graph::types::{Algorithm, PathCost, PathResult};
use crate::graph::Graph;

impl Graph {
    /// Breadth-first path from `start` to `goal` (fewest edges)
    pub fn bfs(&self, start: &str, goal: &str) -> PathResult {
        self.search(Algorithm::Bfs, start, goal)
    }

    /// Depth-first path from `start` to `goal` (any path, insertion-order dependent)
    pub fn dfs(&self, start: &str, goal: &str) -> PathResult {
        self.search(Algorithm::Dfs, start, goal)
    }

    /// Uniform-cost path from `start` to `goal` (least total weight) and its cost
    pub fn ucs(&self, start: &str, goal: &str) -> PathResult {
        self.search(Algorithm::Ucs, start, goal)
    }

    /// Run `algorithm` between two labels.
    ///
    /// `start == goal` always yields the single-node path, even for a label the
    /// graph has never seen. Any other unknown label means no path.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn search(&self, algorithm: Algorithm, start: &str, goal: &str) -> PathResult {
        let (start_id, goal_id) = match (self.node_id(start), self.node_id(goal)) {
            (Some(s), Some(g)) => (s, g),
            _ if start == goal => {
                let cost = (algorithm == Algorithm::Ucs).then_some(PathCost::ZERO);
                return PathResult::found(algorithm, start, goal, vec![start.to_string()], cost, 0);
            }
            (s, g) => {
                tracing::debug!(
                    start_known = s.is_some(),
                    goal_known = g.is_some(),
                    "label not in graph"
                );
                return PathResult::not_found(algorithm, start, goal, 0);
            }
        };

        let SearchOutcome {
            path,
            cost,
            expanded,
        } = match algorithm {
            Algorithm::Bfs => bfs_search(self, start_id, goal_id),
            Algorithm::Dfs => dfs_search(self, start_id, goal_id),
            Algorithm::Ucs => ucs_search(self, start_id, goal_id),
        };

        match path {
            Some(ids) => {
                PathResult::found(algorithm, start, goal, self.resolve_labels(&ids), cost, expanded)
            }
            None => PathResult::not_found(algorithm, start, goal, expanded),
        }
    }

    /// Run each algorithm in order between the same two labels
    pub fn search_all(&self, algorithms: &[Algorithm], start: &str, goal: &str) -> Vec<PathResult> {
        algorithms
            .iter()
            .map(|&algorithm| self.search(algorithm, start, goal))
            .collect()
    }
}
