//! `Graph`: a static-topology graph over a pluggable neighbor store.
//!
//! Nodes are the dense ids `[0, node_count)`. Edges are only ever added;
//! once a traversal borrows the graph it can no longer be mutated, so every
//! run sees a frozen topology.

use crate::collections::{AdjacencyList, WeightMatrix, MAXWEIGHT};
use crate::error::{Error, Result};

use super::store::NeighborStore;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A weighted graph, directed or undirected, over a [`NeighborStore`].
///
/// Undirected edges are stored as both `u -> v` and `v -> u` but counted once
/// in [`Graph::edge_count`].
///
/// ### Performance Characteristics
/// | Operation | Dense | Sparse |
/// |-----------|-------|--------|
/// | `new` | \(O(n^2)\) | \(O(n)\) |
/// | `add_edge` | \(O(1)\) | \(O(1)\) amortized |
/// | `neighbors` | \(O(n)\) | \(O(\text{degree})\) |
/// | `edge_weight` | \(O(1)\) | \(O(\text{degree})\) |
/// | `sources` / `sinks` | \(O(n^2)\) | \(O(n + m)\) |
#[derive(Debug, Clone)]
pub struct Graph<S = WeightMatrix> {
    store: S,
    directed: bool,
    edge_count: usize,
}

/// A graph backed by an `n x n` weight matrix.
pub type DenseGraph = Graph<WeightMatrix>;

/// A graph backed by per-node adjacency lists.
pub type SparseGraph = Graph<AdjacencyList>;

impl<S: NeighborStore> Graph<S> {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize, directed: bool) -> Self {
        Self::with_store(S::with_nodes(node_count), directed)
    }

    /// Wraps an empty store.
    ///
    /// Edges already present in `store` are not reflected in `edge_count`.
    pub fn with_store(store: S, directed: bool) -> Self {
        Self {
            store,
            directed,
            edge_count: 0,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    /// Returns `true` for a directed graph.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of `add_edge` calls that succeeded.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Read-only access to the backend, for diagnostics dumps.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds an edge `u -> v` (and `v -> u` when undirected) of weight 1.0.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `u` or `v` is not a node of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds an edge `u -> v` (and `v -> u` when undirected) with `weight`.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `u` or `v` is not a node of this graph, and
    /// [`Error::Weight`] if `weight` is NaN or not below [`MAXWEIGHT`]. Nothing
    /// is stored on error.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        let n = self.node_count();
        Error::check_node(u, n)?;
        Error::check_node(v, n)?;
        if weight.is_nan() || weight >= MAXWEIGHT {
            return Err(Error::Weight { from: u, to: v });
        }

        self.store.insert(u, v, weight);
        if !self.directed && u != v {
            self.store.insert(v, u, weight);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Weight of `u -> v`; [`MAXWEIGHT`](crate::MAXWEIGHT) when there is no
    /// such edge. Never fails, out-of-range ids simply have no edges.
    #[inline]
    pub fn edge_weight(&self, u: usize, v: usize) -> f64 {
        self.store.weight(u, v)
    }

    /// Returns `true` if `u -> v` exists.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edge_weight(u, v) != MAXWEIGHT
    }

    /// Out-neighbors of `u` with their weights.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `u` is not a node of this graph.
    #[inline]
    pub fn neighbors(&self, u: usize) -> Result<S::Neighbors<'_>> {
        Error::check_node(u, self.node_count())?;
        Ok(self.store.neighbors(u))
    }

    /// Out-degree of `u`.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `u` is not a node of this graph.
    #[inline]
    pub fn out_degree(&self, u: usize) -> Result<usize> {
        Error::check_node(u, self.node_count())?;
        Ok(self.store.degree(u))
    }

    /// Unchecked neighbor walk for the engines, which only pass ids below
    /// `node_count`.
    #[inline]
    pub(crate) fn adjacent(&self, u: usize) -> S::Neighbors<'_> {
        debug_assert!(u < self.node_count(), "node {u} out of range");
        self.store.neighbors(u)
    }

    /// In-degree of every node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indeg = vec![0usize; self.node_count()];
        for u in 0..self.node_count() {
            for (v, _) in self.adjacent(u) {
                indeg[v] += 1;
            }
        }
        indeg
    }

    /// Nodes with zero in-degree, ascending.
    pub fn sources(&self) -> impl Iterator<Item = usize> {
        self.in_degrees()
            .into_iter()
            .enumerate()
            .filter_map(|(u, d)| (d == 0).then_some(u))
    }

    /// Nodes with zero out-degree, ascending.
    pub fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(move |&u| self.store.degree(u) == 0)
    }
}

impl Graph<WeightMatrix> {
    /// The raw weight matrix.
    pub fn matrix(&self) -> &WeightMatrix {
        &self.store
    }
}

impl Graph<AdjacencyList> {
    /// The raw adjacency lists.
    pub fn list(&self) -> &AdjacencyList {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_stored_twice_counted_once() {
        let mut g = SparseGraph::new(3, false);
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.list().edge_count(), 2);
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn undirected_self_loop_is_stored_once() {
        let mut g = SparseGraph::new(2, false);
        g.add_edge(1, 1).unwrap();
        assert_eq!(g.out_degree(1), Ok(1));
    }

    #[test]
    fn add_edge_rejects_unknown_nodes() {
        let mut g = DenseGraph::new(2, true);
        assert_eq!(
            g.add_edge(0, 2),
            Err(Error::Range {
                node: 2,
                node_count: 2
            })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn node_queries_reject_unknown_nodes() {
        let mut g = SparseGraph::new(2, true);
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.out_degree(0), Ok(1));
        assert_eq!(
            g.out_degree(2),
            Err(Error::Range {
                node: 2,
                node_count: 2
            })
        );
        assert_eq!(g.neighbors(1).unwrap().count(), 0);
        assert!(matches!(g.neighbors(5), Err(Error::Range { node: 5, .. })));

        let dense = DenseGraph::new(3, false);
        assert!(matches!(dense.out_degree(3), Err(Error::Range { node: 3, .. })));
    }

    fn rejects_sentinel_weights<S: NeighborStore>() {
        let mut g = Graph::<S>::new(2, true);
        for weight in [MAXWEIGHT, f64::INFINITY, f64::NAN] {
            assert_eq!(
                g.add_weighted_edge(0, 1, weight),
                Err(Error::Weight { from: 0, to: 1 })
            );
        }
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.out_degree(0), Ok(0));

        // The largest finite weight below the sentinel is still an edge.
        let heavy = MAXWEIGHT / 2.0;
        g.add_weighted_edge(0, 1, heavy).unwrap();
        assert_eq!(g.edge_weight(0, 1), heavy);
        assert_eq!(g.out_degree(0), Ok(1));
    }

    #[test]
    fn dense_rejects_sentinel_weights() {
        rejects_sentinel_weights::<WeightMatrix>();
    }

    #[test]
    fn sparse_rejects_sentinel_weights() {
        rejects_sentinel_weights::<AdjacencyList>();
    }

    #[test]
    fn edge_weight_never_fails() {
        let mut g = DenseGraph::new(2, true);
        g.add_weighted_edge(0, 1, 0.5).unwrap();
        assert_eq!(g.edge_weight(0, 1), 0.5);
        assert_eq!(g.edge_weight(1, 0), MAXWEIGHT);
        assert_eq!(g.edge_weight(7, 0), MAXWEIGHT);
    }

    #[test]
    fn matrix_dump_reflects_edges() {
        let mut g = DenseGraph::new(2, false);
        g.add_weighted_edge(0, 1, 2.0).unwrap();
        let rows: Vec<&[f64]> = g.matrix().rows().collect();
        assert_eq!(rows, vec![&[MAXWEIGHT, 2.0][..], &[2.0, MAXWEIGHT][..]]);
    }
}
