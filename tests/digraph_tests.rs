mod common;

use common::small_dag;
use leafy::{DenseGraph, DigraphDfs, NeighborStore, SparseGraph, Traversal, MAXWEIGHT};

fn topological_orders<S: NeighborStore>() {
    let dag = small_dag::<S>();
    let mut dfs = DigraphDfs::new(&dag, 0).unwrap();
    dfs.run();

    assert!(dfs.is_dag());
    assert_eq!(
        dfs.topological_order().collect::<Vec<_>>(),
        vec![0, 6, 2, 3, 5, 4, 9, 11, 12, 10, 1]
    );
    assert_eq!(
        dfs.reverse_topological_order().collect::<Vec<_>>(),
        vec![1, 10, 12, 11, 9, 4, 5, 3, 2, 6, 0]
    );
    // 7 and 8 are only reachable from source 8.
    assert_eq!(dfs.unvisited(), vec![7, 8]);
}

#[test]
fn topological_order_dense() {
    topological_orders::<leafy::WeightMatrix>();
}

#[test]
fn topological_order_sparse() {
    topological_orders::<leafy::AdjacencyList>();
}

#[test]
fn forest_order_respects_every_edge() {
    let dag: SparseGraph = small_dag();
    let mut dfs = DigraphDfs::new(&dag, 0).unwrap();
    dfs.run_forest();
    assert!(dfs.is_dag());

    let order: Vec<_> = dfs.topological_order().collect();
    assert_eq!(order.len(), dag.node_count());
    let mut position = vec![0; dag.node_count()];
    for (i, &u) in order.iter().enumerate() {
        position[u] = i;
    }
    for (u, v) in common::DAG_EDGES {
        assert!(position[u] < position[v], "{u} -> {v} out of order");
    }
}

#[test]
fn cross_edges_do_not_break_dag_detection() {
    let dag: DenseGraph = small_dag();
    let mut dfs = DigraphDfs::new(&dag, 0).unwrap();
    dfs.run();
    assert!(dfs.back_links().is_empty());
    assert!(dfs.dfs().cross_links().contains(6, 4));
    assert!(dfs.dfs().cross_links().contains(6, 9));
}

#[test]
fn closing_a_cycle_is_detected() {
    let mut graph: SparseGraph = small_dag();
    graph.add_edge(12, 0).unwrap();
    let mut dfs = DigraphDfs::new(&graph, 0).unwrap();
    dfs.run();
    assert!(!dfs.is_dag());
    assert!(dfs.back_links().contains(12, 0));
}

fn cycle_outside_the_start_component<S: NeighborStore>() {
    // 7 and 8 are not reachable from 0; 7 -> 8 closes 8 -> 7.
    let mut graph = small_dag::<S>();
    graph.add_edge(7, 8).unwrap();
    let mut dfs = DigraphDfs::new(&graph, 0).unwrap();
    dfs.run();

    assert!(!dfs.is_dag());
    assert!(dfs.back_links().is_empty());
    assert_eq!(dfs.unvisited(), vec![7, 8]);
    assert_eq!(
        dfs.topological_order().collect::<Vec<_>>(),
        vec![0, 6, 2, 3, 5, 4, 9, 11, 12, 10, 1]
    );
}

#[test]
fn cycle_outside_the_start_component_dense() {
    cycle_outside_the_start_component::<leafy::WeightMatrix>();
}

#[test]
fn cycle_outside_the_start_component_sparse() {
    cycle_outside_the_start_component::<leafy::AdjacencyList>();
}

#[test]
fn sources_and_sinks() {
    let dense: DenseGraph = small_dag();
    let sparse: SparseGraph = small_dag();
    for (sources, sinks) in [
        (dense.sources().collect::<Vec<_>>(), dense.sinks().collect::<Vec<_>>()),
        (sparse.sources().collect(), sparse.sinks().collect()),
    ] {
        assert_eq!(sources, vec![0, 8]);
        assert_eq!(sinks, vec![1, 5, 10, 12]);
    }
}

#[test]
fn edge_weights() {
    let dense: DenseGraph = small_dag();
    let sparse: SparseGraph = small_dag();
    for (a, b) in [(0, 1), (0, 2), (2, 4), (4, 2), (11, 12)] {
        assert_eq!(dense.edge_weight(a, b), sparse.edge_weight(a, b));
    }
    assert_eq!(dense.edge_weight(0, 1), 0.5);
    assert_eq!(dense.edge_weight(0, 2), 1.0);
    assert_eq!(dense.edge_weight(2, 4), MAXWEIGHT);
    // Directed: no reverse edge.
    assert_eq!(sparse.edge_weight(1, 0), MAXWEIGHT);
    assert_eq!(dense.edge_count(), 17);
}
