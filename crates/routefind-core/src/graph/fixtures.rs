//! Shared graphs for unit tests

use proptest::collection::vec;
use proptest::strategy::Strategy;

use crate::graph::{Graph, Weight};

/// The classic Romania road map, in the reference insertion order
pub const ROMANIA_EDGES: [(&str, &str, Weight); 23] = [
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Zerind", "Oradea", 71),
    ("Oradea", "Sibiu", 151),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Dobreta", 75),
    ("Dobreta", "Craiova", 120),
    ("Craiova", "Rimnicu_Vilcea", 146),
    ("Rimnicu_Vilcea", "Sibiu", 80),
    ("Craiova", "Pitesti", 138),
    ("Rimnicu_Vilcea", "Pitesti", 97),
    ("Sibiu", "Fagaras", 99),
    ("Fagaras", "Bucharest", 211),
    ("Pitesti", "Bucharest", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Hirsova", "Eforie", 86),
    ("Urziceni", "Vaslui", 142),
    ("Vaslui", "Lasi", 92),
    ("Lasi", "Neamt", 87),
];

/// Same map in the line-oriented input format
pub const ROMANIA_INPUT: &str = "23
Arad Zerind 75
Arad Sibiu 140
Arad Timisoara 118
Zerind Oradea 71
Oradea Sibiu 151
Timisoara Lugoj 111
Lugoj Mehadia 70
Mehadia Dobreta 75
Dobreta Craiova 120
Craiova Rimnicu_Vilcea 146
Rimnicu_Vilcea Sibiu 80
Craiova Pitesti 138
Rimnicu_Vilcea Pitesti 97
Sibiu Fagaras 99
Fagaras Bucharest 211
Pitesti Bucharest 101
Bucharest Giurgiu 90
Bucharest Urziceni 85
Urziceni Hirsova 98
Hirsova Eforie 86
Urziceni Vaslui 142
Vaslui Lasi 92
Lasi Neamt 87
Arad Bucharest
";

pub fn romania() -> Graph {
    let mut graph = Graph::new();
    for (a, b, w) in ROMANIA_EDGES {
        graph.add(a, b, w);
    }
    graph
}

/// Edge lists over node indices `0..nodes`, up to `max_edges` long
pub fn edge_list(
    nodes: usize,
    max_edges: usize,
    max_weight: Weight,
) -> impl Strategy<Value = Vec<(usize, usize, Weight)>> {
    vec((0..nodes, 0..nodes, 0..=max_weight), 0..=max_edges)
}

/// Graph over labels `n0..n{nodes-1}`; every label is registered even if no edge touches it
pub fn graph_from_edges(nodes: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..nodes {
        graph.add_node(&format!("n{i}"));
    }
    for &(a, b, w) in edges {
        graph.add(&format!("n{a}"), &format!("n{b}"), w);
    }
    graph
}

/// Every simple path from `start` to `goal`, found by exhaustive enumeration
pub fn all_simple_paths(graph: &Graph, start: &str, goal: &str) -> Vec<Vec<String>> {
    fn walk(
        graph: &Graph,
        current: &str,
        goal: &str,
        path: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if current == goal {
            out.push(path.clone());
            return;
        }
        for (next, _) in graph.neighbors_of(current) {
            if path.iter().any(|p| p == next) {
                continue;
            }
            path.push(next.to_string());
            walk(graph, next, goal, path, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    let mut path = vec![start.to_string()];
    walk(graph, start, goal, &mut path, &mut out);
    out
}
