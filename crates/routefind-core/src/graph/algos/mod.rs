//! Graph search implementations
//!
//! - `bfs`: breadth-first search, fewest edges
//! - `dfs`: depth-first search with an explicit stack
//! - `ucs`: uniform-cost search (Dijkstra), least total weight
//! - `path`: parent-pointer path reconstruction shared by all three

pub mod bfs;
pub mod dfs;
pub mod path;
pub mod ucs;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use path::{reconstruct_path, SearchOutcome};
pub use ucs::{ucs_search, HeapEntry};
