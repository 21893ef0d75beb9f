use crate::graph::types::{Edge, NodeId};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    /// Number of nodes; every `NodeId` handed out is below this bound
    fn node_count(&self) -> usize;

    /// Outgoing half-edges of `node`, in edge-insertion order
    fn neighbors(&self, node: NodeId) -> &[Edge];
}
