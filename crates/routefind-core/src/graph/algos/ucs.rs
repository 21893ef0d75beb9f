use crate::graph::algos::path::{reconstruct_path, SearchOutcome};
use crate::graph::types::{NodeId, PathCost};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap entry, ordered by accumulated cost and then by node id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub accumulated_cost: PathCost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during uniform-cost search
struct UcsState {
    best: Vec<Option<PathCost>>,
    parents: Vec<Option<NodeId>>,
    finalized: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    expanded: usize,
}

impl UcsState {
    fn new(node_count: usize) -> Self {
        Self {
            best: vec![None; node_count],
            parents: vec![None; node_count],
            finalized: vec![false; node_count],
            heap: BinaryHeap::new(),
            expanded: 0,
        }
    }

    /// Record `cost` for `node` via `parent` if it beats the best known cost
    fn relax(&mut self, node: NodeId, parent: NodeId, cost: PathCost) {
        if self.finalized[node.index()] {
            return;
        }
        if self.best[node.index()].is_none_or(|best| cost < best) {
            self.best[node.index()] = Some(cost);
            self.parents[node.index()] = Some(parent);
            self.heap.push(Reverse(HeapEntry {
                node,
                accumulated_cost: cost,
            }));
        }
    }
}

/// Uniform-cost search (Dijkstra) from `start` until `goal` is popped.
///
/// Assumes non-negative weights, which `Weight` guarantees. Superseded heap
/// entries are skipped once their node is finalized. On success the outcome
/// carries the least total weight of any `start`-`goal` path.
#[tracing::instrument(skip(provider), fields(start = start.index(), goal = goal.index()))]
pub fn ucs_search(provider: &dyn GraphProvider, start: NodeId, goal: NodeId) -> SearchOutcome {
    let mut state = UcsState::new(provider.node_count());

    state.best[start.index()] = Some(PathCost::ZERO);
    state.heap.push(Reverse(HeapEntry {
        node: start,
        accumulated_cost: PathCost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_cost,
    })) = state.heap.pop()
    {
        if state.finalized[current.index()] {
            continue;
        }
        state.finalized[current.index()] = true;
        state.expanded += 1;

        if current == goal {
            tracing::debug!(expanded = state.expanded, cost = %accumulated_cost, "ucs reached goal");
            return SearchOutcome::reached(
                reconstruct_path(&state.parents, start, goal),
                Some(accumulated_cost),
                state.expanded,
            );
        }

        for edge in provider.neighbors(current) {
            state.relax(edge.to, current, accumulated_cost + edge.weight);
        }
    }

    tracing::debug!(expanded = state.expanded, "ucs exhausted frontier");
    SearchOutcome::exhausted(state.expanded)
}
