//! Graph storage and the algorithms that consume it.
//!
//! - `store`: the [`NeighborStore`] capability and its dense/sparse backends
//! - `basic`: [`Graph`], generic over the store
//! - `search`: depth-first and breadth-first engines plus digraph analysis
//! - `shortest_path`: single-source Dijkstra
//!
//! Data flows one way: a graph is built, then handed to any number of
//! independent runs. Each run owns its own state and only reads the graph.

pub mod basic;
pub mod search;
pub mod shortest_path;
pub mod store;

pub use basic::{DenseGraph, Graph, SparseGraph, DEFAULT_WEIGHT};
pub use search::{Bfs, Dfs, Diagnostics, DigraphDfs, Links, SearchState, Traversal};
pub use shortest_path::Dijkstra;
pub use store::NeighborStore;

use crate::collections::MAXWEIGHT;

/// Adds two weights without ever passing the [`MAXWEIGHT`] sentinel.
///
/// Anything at or beyond the sentinel (including infinities) collapses to
/// `MAXWEIGHT`, so "unreached" stays unreached.
#[inline]
pub(crate) fn saturating_add(a: f64, b: f64) -> f64 {
    if a >= MAXWEIGHT || b >= MAXWEIGHT {
        return MAXWEIGHT;
    }
    let sum = a + b;
    if sum.is_finite() && sum < MAXWEIGHT {
        sum
    } else {
        MAXWEIGHT
    }
}
