//! # `leafy` - Graph Search Toolkit
//!
//! Directed and undirected graphs over dense node ids `0..n`, with a
//! weighted adjacency matrix or an adjacency-list backend, plus the
//! traversal engines that analyse them.
//!
//! ## Key Features
//!
//! - **Two storage backends**: [`DenseGraph`] (O(1) edge lookup, O(n²) memory)
//!   and [`SparseGraph`] (O(n + m) memory), behind one [`Graph`] API
//! - **Depth-first search** ([`Dfs`]): edge classification, low-links,
//!   bridges, articulation points, bipartiteness, simple paths
//! - **Breadth-first search** ([`Bfs`]): the same classification plus
//!   fewest-edge paths
//! - **DAG analysis** ([`DigraphDfs`]): cycle detection and topological order
//! - **Shortest paths** ([`Dijkstra`]) over a decrease-key [`PriorityQueue`]
//!
//! ## Architecture
//!
//! Building a graph and analysing it are separate phases. A graph is mutated
//! only through `add_edge`/`add_weighted_edge`; every engine then borrows it
//! immutably and owns its own per-run state. Many engines can therefore run
//! over the same graph at once, on one thread or many.
//!
//! ### Core Abstractions
//!
//! 1. **Primitives** (`collections`): [`Queue`] ring-buffer deque,
//!    [`PriorityQueue`] indexed binary heap, [`WeightMatrix`] and
//!    [`AdjacencyList`] edge stores
//! 2. **Storage capability** ([`NeighborStore`]): what a backend must offer
//!    for the engines to walk it
//! 3. **Engines** (`graph::search`, `graph::shortest_path`): traversal runs
//!    exposing their results through [`Traversal`]
//!
//! ## Example
//!
//! ```rust
//! use leafy::{Bfs, DenseGraph, Traversal};
//!
//! let mut graph = DenseGraph::new(4, false);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(0, 3)?;
//!
//! let mut bfs = Bfs::new(&graph, 0)?;
//! bfs.run();
//! assert_eq!(bfs.shortest_path(2)?, vec![0, 1, 2]);
//! assert!(bfs.is_bipartite());
//! # Ok::<(), leafy::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{AdjacencyList, HeapOrder, PriorityQueue, Queue, WeightMatrix, MAXWEIGHT};
pub use error::{Error, Result};
pub use graph::{
    Bfs, DenseGraph, Dfs, Diagnostics, DigraphDfs, Dijkstra, Graph, Links, NeighborStore,
    SearchState, SparseGraph, Traversal, DEFAULT_WEIGHT,
};
