use crate::graph::algos::path::{reconstruct_path, SearchOutcome};
use crate::graph::types::NodeId;
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Breadth-first search from `start` until `goal` is dequeued.
///
/// Nodes are marked visited when enqueued, so each node enters the queue at
/// most once and its parent is its first discoverer. The returned path has the
/// fewest edges of any `start`-`goal` path.
#[tracing::instrument(skip(provider), fields(start = start.index(), goal = goal.index()))]
pub fn bfs_search(provider: &dyn GraphProvider, start: NodeId, goal: NodeId) -> SearchOutcome {
    let node_count = provider.node_count();
    let mut visited = vec![false; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut expanded = 0;

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        expanded += 1;

        if current == goal {
            tracing::debug!(expanded, "bfs reached goal");
            return SearchOutcome::reached(reconstruct_path(&parents, start, goal), None, expanded);
        }

        for edge in provider.neighbors(current) {
            if !visited[edge.to.index()] {
                visited[edge.to.index()] = true;
                parents[edge.to.index()] = Some(current);
                queue.push_back(edge.to);
            }
        }
    }

    tracing::debug!(expanded, "bfs exhausted frontier");
    SearchOutcome::exhausted(expanded)
}
