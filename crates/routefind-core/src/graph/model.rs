//! Adjacency-list graph with interned node labels

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, NodeId, PathCost, Weight};
use std::collections::HashMap;

/// Undirected weighted graph.
///
/// Labels are interned to dense `NodeId`s on first reference. Each call to
/// [`Graph::add`] appends one half-edge to both endpoints' adjacency lists, so
/// parallel edges and self-loops accumulate rather than being merged.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    ids: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label` if unseen and return its id
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected edge between `a` and `b`
    pub fn add(&mut self, a: &str, b: &str, weight: Weight) {
        let a_id = self.add_node(a);
        let b_id = self.add_node(b);
        self.adjacency[a_id.0].push(Edge { to: b_id, weight });
        self.adjacency[b_id.0].push(Edge { to: a_id, weight });
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of `add` calls, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    /// Labels in order of first appearance
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id.0]
    }

    /// Neighbor labels and weights of `label`, in insertion order
    pub fn neighbors_of(&self, label: &str) -> Vec<(&str, Weight)> {
        self.node_id(label)
            .map(|id| {
                self.neighbors(id)
                    .iter()
                    .map(|edge| (self.label(edge.to), edge.weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total weight of walking `path` hop by hop.
    ///
    /// Returns `None` if any consecutive pair is not joined by an edge or a label
    /// is unknown. Between parallel edges the lightest one is taken.
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Option<PathCost> {
        let ids = path
            .iter()
            .map(|label| self.node_id(label.as_ref()))
            .collect::<Option<Vec<_>>>()?;

        ids.windows(2).try_fold(PathCost::ZERO, |acc, hop| {
            self.neighbors(hop[0])
                .iter()
                .filter(|edge| edge.to == hop[1])
                .map(|edge| edge.weight)
                .min()
                .map(|weight| acc + weight)
        })
    }

    pub(crate) fn resolve_labels(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| self.label(id).to_string()).collect()
    }
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn neighbors(&self, node: NodeId) -> &[Edge] {
        Graph::neighbors(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_registers_both_directions() {
        let mut graph = Graph::new();
        graph.add("Arad", "Zerind", 75);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors_of("Arad"), vec![("Zerind", 75)]);
        assert_eq!(graph.neighbors_of("Zerind"), vec![("Arad", 75)]);
    }

    #[test]
    fn test_ids_are_dense_in_first_appearance_order() {
        let mut graph = Graph::new();
        graph.add("B", "A", 1);
        graph.add("C", "B", 1);

        assert_eq!(graph.node_id("B"), Some(NodeId(0)));
        assert_eq!(graph.node_id("A"), Some(NodeId(1)));
        assert_eq!(graph.node_id("C"), Some(NodeId(2)));
        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(graph.node_id("D"), None);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        let lone = graph.add_node("Lone");
        graph.add("Lone", "Other", 4);

        assert_eq!(graph.add_node("Lone"), lone);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        let mut graph = Graph::new();
        graph.add("A", "B", 5);
        graph.add("A", "B", 3);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors_of("A"), vec![("B", 5), ("B", 3)]);
        assert_eq!(graph.path_weight(&["A", "B"]), Some(PathCost::from(3)));
    }

    #[test]
    fn test_self_loop_appends_twice() {
        let mut graph = Graph::new();
        graph.add("A", "A", 2);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors_of("A"), vec![("A", 2), ("A", 2)]);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add("Arad", "Zerind", 75);
        graph.add("Arad", "Sibiu", 140);
        graph.add("Arad", "Timisoara", 118);

        let names: Vec<&str> = graph
            .neighbors_of("Arad")
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["Zerind", "Sibiu", "Timisoara"]);
    }

    #[test]
    fn test_provider_view_matches_graph() {
        let mut graph = Graph::new();
        graph.add("A", "B", 7);
        graph.add_node("Lone");

        let provider: &dyn GraphProvider = &graph;
        let a = graph.node_id("A").unwrap();
        assert_eq!(provider.node_count(), 3);
        assert_eq!(
            provider.neighbors(a),
            &[Edge {
                to: graph.node_id("B").unwrap(),
                weight: 7
            }]
        );
    }

    #[test]
    fn test_path_weight_rejects_missing_edge() {
        let mut graph = Graph::new();
        graph.add("A", "B", 1);
        graph.add("B", "C", 2);

        assert_eq!(graph.path_weight(&["A", "B", "C"]), Some(PathCost::from(3)));
        assert_eq!(graph.path_weight(&["A", "C"]), None);
        assert_eq!(graph.path_weight(&["A", "Nowhere"]), None);
        assert_eq!(graph.path_weight(&["A"]), Some(PathCost::ZERO));
    }
}
