//! Traversal engines.
//!
//! - `dfs`: depth-first search, low-links, bridges, articulation points
//! - `bfs`: breadth-first search and fewest-edge paths
//! - `digraph`: DAG detection and topological order
//! - `state`: the per-run state and the shared [`Traversal`] accessors
//!
//! Every engine borrows its graph immutably and owns its state, so several
//! runs may read the same graph at once, including from different threads.

pub mod bfs;
pub mod dfs;
pub mod digraph;
pub mod state;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use digraph::DigraphDfs;
pub use state::{DiagnosticRow, Diagnostics, Links, SearchState, Traversal};
