//! The neighbor-store capability shared by the dense and sparse backends.
//!
//! Traversal engines only ever talk to a [`NeighborStore`]: they never know
//! whether edges live in a matrix or in linked lists.

use crate::collections::{AdjacencyList, ListIter, RowIter, WeightMatrix, MAXWEIGHT};

/// Storage for weighted out-edges keyed by dense node ids.
///
/// Both implementations must yield the same `(neighbor, weight)` set for the
/// same insertion sequence; only the order may differ (column order for the
/// matrix, insertion order for the lists).
pub trait NeighborStore {
    /// Lazy, finite iterator over `(neighbor, weight)` pairs.
    type Neighbors<'a>: Iterator<Item = (usize, f64)> + 'a
    where
        Self: 'a;

    /// Creates an empty store for `node_count` nodes.
    fn with_nodes(node_count: usize) -> Self;

    /// Number of nodes the store was created for.
    fn node_count(&self) -> usize;

    /// Records the directed edge `u -> v`.
    ///
    /// Callers validate `u` and `v`; implementations may panic on bad ids.
    fn insert(&mut self, u: usize, v: usize, weight: f64);

    /// Out-neighbors of `u` with their weights.
    fn neighbors(&self, u: usize) -> Self::Neighbors<'_>;

    /// Weight of `u -> v`, or [`MAXWEIGHT`] if absent or out of range.
    fn weight(&self, u: usize, v: usize) -> f64;

    /// Out-degree of `u`.
    fn degree(&self, u: usize) -> usize;
}

impl NeighborStore for WeightMatrix {
    type Neighbors<'a> = RowIter<'a>;

    fn with_nodes(node_count: usize) -> Self {
        WeightMatrix::new(node_count)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.size()
    }

    #[inline]
    fn insert(&mut self, u: usize, v: usize, weight: f64) {
        self.set(u, v, weight);
    }

    #[inline]
    fn neighbors(&self, u: usize) -> RowIter<'_> {
        self.row_iter(u)
    }

    #[inline]
    fn weight(&self, u: usize, v: usize) -> f64 {
        self.get(u, v).unwrap_or(MAXWEIGHT)
    }

    fn degree(&self, u: usize) -> usize {
        self.row_len(u)
    }
}

impl NeighborStore for AdjacencyList {
    type Neighbors<'a> = ListIter<'a>;

    fn with_nodes(node_count: usize) -> Self {
        AdjacencyList::new(node_count)
    }

    #[inline]
    fn node_count(&self) -> usize {
        AdjacencyList::node_count(self)
    }

    #[inline]
    fn insert(&mut self, u: usize, v: usize, weight: f64) {
        self.append(u, v, weight);
    }

    #[inline]
    fn neighbors(&self, u: usize) -> ListIter<'_> {
        self.iter(u)
    }

    fn weight(&self, u: usize, v: usize) -> f64 {
        AdjacencyList::weight(self, u, v).unwrap_or(MAXWEIGHT)
    }

    #[inline]
    fn degree(&self, u: usize) -> usize {
        self.length(u)
    }
}
