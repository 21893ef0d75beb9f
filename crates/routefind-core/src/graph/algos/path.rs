//! Path reconstruction shared by all searches

use crate::graph::types::{NodeId, PathCost};

/// What a search hands back before labels are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Node ids from start to goal inclusive, `None` if the goal was never reached
    pub path: Option<Vec<NodeId>>,
    pub cost: Option<PathCost>,
    pub expanded: usize,
}

impl SearchOutcome {
    pub(crate) fn reached(path: Option<Vec<NodeId>>, cost: Option<PathCost>, expanded: usize) -> Self {
        let cost = path.as_ref().and(cost);
        Self {
            path,
            cost,
            expanded,
        }
    }

    pub(crate) fn exhausted(expanded: usize) -> Self {
        Self {
            path: None,
            cost: None,
            expanded,
        }
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Walk parent pointers from `goal` back to `start` and return the forward path.
///
/// The walk is bounded by the number of nodes; a chain that does not end at
/// `start` within that bound yields `None`.
pub fn reconstruct_path(
    parents: &[Option<NodeId>],
    start: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        if path.len() > parents.len() {
            tracing::warn!(start = start.index(), goal = goal.index(), "parent chain cycles");
            return None;
        }
        let pred = parents.get(current.index()).copied().flatten()?;
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Some(path)
}
