use crate::graph::algos::path::{reconstruct_path, SearchOutcome};
use crate::graph::types::NodeId;
use crate::graph::GraphProvider;

/// Depth-first search with an explicit stack, stopping when `goal` is popped.
///
/// Neighbors are pushed in edge-insertion order and marked visited as they are
/// pushed, so the most recently inserted unvisited neighbor is explored first.
/// The path is valid but carries no optimality guarantee.
#[tracing::instrument(skip(provider), fields(start = start.index(), goal = goal.index()))]
pub fn dfs_search(provider: &dyn GraphProvider, start: NodeId, goal: NodeId) -> SearchOutcome {
    let node_count = provider.node_count();
    let mut visited = vec![false; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut stack: Vec<NodeId> = Vec::new();
    let mut expanded = 0;

    visited[start.index()] = true;
    stack.push(start);

    while let Some(current) = stack.pop() {
        expanded += 1;

        if current == goal {
            tracing::debug!(expanded, "dfs reached goal");
            return SearchOutcome::reached(reconstruct_path(&parents, start, goal), None, expanded);
        }

        for edge in provider.neighbors(current) {
            if !visited[edge.to.index()] {
                visited[edge.to.index()] = true;
                parents[edge.to.index()] = Some(current);
                stack.push(edge.to);
            }
        }
    }

    tracing::debug!(expanded, "dfs exhausted frontier");
    SearchOutcome::exhausted(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn ids(graph: &Graph, labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|l| graph.node_id(l).unwrap()).collect()
    }

    #[test]
    fn test_dfs_explores_last_inserted_neighbor_first() {
        let mut graph = Graph::new();
        graph.add("S", "A", 1);
        graph.add("S", "B", 1);
        graph.add("A", "G", 1);
        graph.add("B", "G", 1);

        let s = graph.node_id("S").unwrap();
        let g = graph.node_id("G").unwrap();
        let outcome = dfs_search(&graph, s, g);

        assert_eq!(outcome.path, Some(ids(&graph, &["S", "B", "G"])));
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        // S-G is a direct edge but inserted first, so the chain is explored first.
        let mut graph = Graph::new();
        graph.add("S", "G", 1);
        graph.add("S", "A", 1);
        graph.add("A", "B", 1);
        graph.add("B", "G", 1);

        let s = graph.node_id("S").unwrap();
        let g = graph.node_id("G").unwrap();
        let outcome = dfs_search(&graph, s, g);

        // G is marked visited from S, so B cannot claim it; the stack still
        // pops A and B before G.
        assert_eq!(outcome.path, Some(ids(&graph, &["S", "G"])));
        assert_eq!(outcome.expanded, 4);
    }

    #[test]
    fn test_dfs_unreachable() {
        let mut graph = Graph::new();
        graph.add("A", "B", 1);
        graph.add("C", "D", 1);

        let a = graph.node_id("A").unwrap();
        let d = graph.node_id("D").unwrap();
        let outcome = dfs_search(&graph, a, d);

        assert!(!outcome.found());
        assert_eq!(outcome.cost, None);
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let mut graph = Graph::new();
        graph.add("A", "B", 1);

        let a = graph.node_id("A").unwrap();
        assert_eq!(dfs_search(&graph, a, a).path, Some(vec![a]));
    }
}
