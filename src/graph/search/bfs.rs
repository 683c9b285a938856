//! Breadth-first search with the same edge classification as the DFS engine.
//!
//! Nodes are discovered (and given their pre-order index) when first
//! enqueued, so pre-order is level order and structure pointers give
//! fewest-edge paths back to the source.

use tracing::debug;

use crate::collections::Queue;
use crate::error::{Error, Result};
use crate::graph::{Graph, NeighborStore};

use super::state::{Diagnostics, SearchState, Traversal};

/// A breadth-first run over a borrowed graph.
pub struct Bfs<'g, S> {
    graph: &'g Graph<S>,
    start: usize,
    state: SearchState,
}

impl<'g, S: NeighborStore> Bfs<'g, S> {
    /// Prepares a search of `graph` from `start`.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `start` is not a node of `graph`.
    pub fn new(graph: &'g Graph<S>, start: usize) -> Result<Self> {
        Error::check_node(start, graph.node_count())?;
        Ok(Self {
            graph,
            start,
            state: SearchState::new(graph.node_count()),
        })
    }

    /// The source node.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Explores everything reachable from the start node, discarding any
    /// previous results.
    pub fn run(&mut self) {
        let graph = self.graph;
        let undirected = !graph.is_directed();
        self.state = SearchState::new(graph.node_count());
        debug!(start = self.start, nodes = graph.node_count(), "bfs run");

        let state = &mut self.state;
        let mut queue = Queue::new();
        state.discover(self.start, None);
        queue.push_tail(self.start);

        while let Ok(u) = queue.pop_head() {
            let pre_u = state.pre[u];
            for (v, _) in graph.adjacent(u) {
                state.edge_count += 1;
                match state.pre[v] {
                    None => {
                        state.tree_links.insert(u, v);
                        state.discover(v, Some(u));
                        queue.push_tail(v);
                    }
                    Some(_) if undirected && state.structure[u] == Some(v) => {
                        state.parent_links.insert(u, v);
                    }
                    Some(pre_v) if pre_u < Some(pre_v) => state.down_links.insert(u, v),
                    Some(_) => state.back_links.insert(u, v),
                }
            }
        }

        debug!(
            visited = state.pre_counter,
            edges = state.edge_count,
            "bfs complete"
        );
    }

    /// Fewest-edge path from the source to `target`, source first.
    ///
    /// # Errors
    /// [`Error::Range`] for an unknown node, [`Error::Unreachable`] if
    /// `target` is not reachable from the source.
    pub fn shortest_path(&self, target: usize) -> Result<Vec<usize>> {
        self.state.path_to(target)
    }

    /// Number of edges on the shortest path to `target`.
    ///
    /// # Errors
    /// Same as [`Bfs::shortest_path`].
    pub fn distance(&self, target: usize) -> Result<usize> {
        Ok(self.shortest_path(target)?.len() - 1)
    }

    /// The `pre`, `structure` and `colour` rows.
    pub fn diagnostics(&self) -> Diagnostics {
        self.state.diagnostics(false)
    }
}

impl<S: NeighborStore> Traversal for Bfs<'_, S> {
    fn state(&self) -> &SearchState {
        &self.state
    }
}
