//! Routefind Core Library
//!
//! Graph model and uninformed search (BFS, DFS, uniform-cost) for routefind,
//! plus the input parsing, rendering and configuration the CLI builds on.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
