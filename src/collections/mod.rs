//! Supporting primitives for the graph stores and traversal engines.
//!
//! - `deque`: growable ring-buffer double-ended queue
//! - `binary_heap`: decrease-key priority queue over external weights
//! - `matrix`: dense square weight matrix
//! - `adj_list`: append-only per-node neighbor lists

pub mod adj_list;
pub mod binary_heap;
pub mod deque;
pub mod matrix;

pub use adj_list::{AdjacencyList, ListIter};
pub use binary_heap::{HeapOrder, PriorityQueue};
pub use deque::{Queue, QueueIter};
pub use matrix::{RowIter, WeightMatrix};

/// Sentinel weight meaning "no edge" in stores and "unreached" in
/// shortest-path distances.
pub const MAXWEIGHT: f64 = f64::MAX;
