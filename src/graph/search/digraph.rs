//! Directed-graph analysis on top of the depth-first engine: cycle detection
//! and topological ordering from finish order.

use crate::error::Result;
use crate::graph::{Graph, NeighborStore};

use super::dfs::Dfs;
use super::state::{Diagnostics, SearchState, Traversal};

/// A depth-first run specialised for DAG questions.
///
/// `run` explores from the start node only and `run_forest` covers every
/// component. The orders describe whatever the last run explored, while
/// [`DigraphDfs::is_dag`] always judges the whole graph.
///
/// ```
/// use leafy::{DenseGraph, DigraphDfs};
///
/// let mut graph = DenseGraph::new(3, true);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// let mut dfs = DigraphDfs::new(&graph, 0).unwrap();
/// dfs.run();
/// assert!(dfs.is_dag());
/// assert_eq!(dfs.topological_order().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub struct DigraphDfs<'g, S> {
    dfs: Dfs<'g, S>,
    cyclic: bool,
}

impl<'g, S: NeighborStore> DigraphDfs<'g, S> {
    /// Prepares an analysis of `graph` rooted at `start`.
    ///
    /// # Errors
    /// Returns [`Error::Range`](crate::Error::Range) if `start` is not a node
    /// of `graph`.
    pub fn new(graph: &'g Graph<S>, start: usize) -> Result<Self> {
        Ok(Self {
            dfs: Dfs::new(graph, start)?,
            cyclic: false,
        })
    }

    /// Explores everything reachable from the start node.
    pub fn run(&mut self) {
        self.dfs.run();
        self.cyclic = self.dfs.has_cycle_anywhere();
    }

    /// Explores the whole graph, restarting from unvisited nodes in
    /// ascending order.
    pub fn run_forest(&mut self) {
        self.dfs.run_forest();
        self.cyclic = !self.dfs.back_links().is_empty();
    }

    /// Returns `true` if a depth-first pass over every component records no
    /// back links, i.e. the whole graph is acyclic.
    ///
    /// Components the last run did not reach are still checked, so a cycle
    /// elsewhere in the graph makes this `false` even after [`DigraphDfs::run`].
    /// Meaningless before either run.
    pub fn is_dag(&self) -> bool {
        !self.cyclic
    }

    /// Explored nodes in decreasing finish order.
    ///
    /// Only a valid topological order when [`DigraphDfs::is_dag`] holds;
    /// on a cyclic graph the sequence is still produced but guarantees
    /// nothing.
    pub fn topological_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.dfs.post_order().iter().rev().copied()
    }

    /// Explored nodes in increasing finish order.
    pub fn reverse_topological_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.dfs.post_order().iter().copied()
    }

    /// The underlying depth-first run.
    pub fn dfs(&self) -> &Dfs<'g, S> {
        &self.dfs
    }

    /// The `pre`, `low`, `post`, `structure` and `colour` rows.
    pub fn diagnostics(&self) -> Diagnostics {
        self.dfs.diagnostics()
    }
}

impl<S: NeighborStore> Traversal for DigraphDfs<'_, S> {
    fn state(&self) -> &SearchState {
        self.dfs.state()
    }
}
