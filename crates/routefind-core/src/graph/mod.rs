//! Graph model and uninformed search
//!
//! Provides the road-map graph and the searches run over it:
//! - Adjacency-list graph with interned labels
//! - BFS, DFS and uniform-cost search over `GraphProvider`
//! - Label-level entry points returning `PathResult`

pub mod algos;
pub mod model;
pub mod search;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{bfs_search, dfs_search, ucs_search, SearchOutcome};
pub use model::Graph;
pub use traversal::GraphProvider;
pub use types::{Algorithm, Edge, NodeId, PathCost, PathResult, Weight};
