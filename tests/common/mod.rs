//! Shared graph fixtures for the integration tests.

#![allow(dead_code)]

use leafy::{Graph, NeighborStore};

/// Two components: nodes 0..16 (a cyclic core with pendant paths) and the
/// 16..22 cluster. Undirected, unit weights.
pub const SEARCH_EDGES: [(usize, usize); 26] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (3, 4),
    (3, 5),
    (5, 6),
    (5, 7),
    (5, 8),
    (6, 8),
    (7, 8),
    (2, 9),
    (9, 10),
    (2, 11),
    (11, 12),
    (2, 13),
    (13, 14),
    (14, 15),
    (15, 10),
    (16, 17),
    (16, 18),
    (17, 19),
    (17, 20),
    (19, 20),
    (20, 21),
    (17, 21),
];

/// 13-node DAG with two sources (0 and 8).
pub const DAG_EDGES: [(usize, usize); 17] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 5),
    (0, 6),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 9),
    (6, 4),
    (6, 9),
    (7, 6),
    (8, 7),
    (9, 10),
    (9, 11),
    (9, 12),
    (11, 12),
];

/// 8-node weighted road network; the best 0 -> 3 route is 0, 1, 2, 7, 3.
pub const NETWORK_EDGES: [(usize, usize, f64); 8] = [
    (0, 1, 0.4),
    (1, 2, 1.3),
    (2, 4, 1.7),
    (2, 7, 0.3),
    (4, 5, 0.3),
    (5, 6, 0.5),
    (6, 3, 0.1),
    (7, 3, 0.6),
];

pub fn search_graph<S: NeighborStore>() -> Graph<S> {
    let mut graph = Graph::new(22, false);
    for (u, v) in SEARCH_EDGES {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

pub fn small_dag<S: NeighborStore>() -> Graph<S> {
    let mut graph = Graph::new(13, true);
    graph.add_weighted_edge(0, 1, 0.5).unwrap();
    for (u, v) in DAG_EDGES.into_iter().skip(1) {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

pub fn network<S: NeighborStore>() -> Graph<S> {
    let mut graph = Graph::new(8, true);
    for (u, v, w) in NETWORK_EDGES {
        graph.add_weighted_edge(u, v, w).unwrap();
    }
    graph
}

/// Sorted `(u, v)` pairs, for order-insensitive comparisons.
pub fn sorted(pairs: impl IntoIterator<Item = (usize, usize)>) -> Vec<(usize, usize)> {
    let mut pairs: Vec<_> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}
