//! Depth-first search with edge classification and low-link analysis.
//!
//! The search is iterative: an explicit stack of `(node, neighbor iterator)`
//! frames replaces recursion, so chains of any length run in constant call
//! depth. Each frame resumes its neighbor iterator exactly where it stopped.
//!
//! For a visited neighbor `v` of `u` the edge is classified as
//! - parent link: undirected graph and `v` is `u`'s structure parent,
//! - down link: `v` was discovered after `u`,
//! - back link: `v` was discovered earlier and is still open,
//! - cross link: `v` was discovered earlier and already finished
//!   (directed graphs only).
//!
//! Low-links take the minimum over tree children and over the pre-order of
//! back and down targets, which is what bridge and articulation detection
//! read.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NeighborStore};

use super::state::{Diagnostics, Links, SearchState, Traversal};

/// A depth-first run over a borrowed graph.
///
/// ```
/// use leafy::{Dfs, SparseGraph, Traversal};
///
/// let mut graph = SparseGraph::new(4, false);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(2, 3).unwrap();
///
/// let mut dfs = Dfs::new(&graph, 0).unwrap();
/// dfs.run();
/// assert!(dfs.is_bipartite());
/// assert_eq!(dfs.simple_path(3).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub struct Dfs<'g, S> {
    graph: &'g Graph<S>,
    start: usize,
    state: SearchState,
}

impl<'g, S: NeighborStore> Dfs<'g, S> {
    /// Prepares a search of `graph` rooted at `start`.
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

    /// The root node.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Explores everything reachable from the start node.
    ///
    /// Any previous results are discarded first.
    pub fn run(&mut self) {
        self.state = SearchState::new(self.graph.node_count());
        debug!(start = self.start, nodes = self.graph.node_count(), "dfs run");
        self.explore(self.start);
        self.log_summary();
    }

    /// Like [`Dfs::run`], then restarts from every still-unvisited node in
    /// ascending order so the whole graph is covered.
    pub fn run_forest(&mut self) {
        self.state = SearchState::new(self.graph.node_count());
        debug!(start = self.start, nodes = self.graph.node_count(), "dfs forest run");
        self.explore(self.start);
        self.explore_remaining();
        self.log_summary();
    }

    fn explore_remaining(&mut self) {
        for root in 0..self.graph.node_count() {
            if !self.state.is_visited(root) {
                self.explore(root);
            }
        }
    }

    /// Whether a forest run seeded with the current results would record a
    /// back link anywhere in the graph. The current results are untouched.
    pub(crate) fn has_cycle_anywhere(&self) -> bool {
        if !self.state.back_links.is_empty() {
            return true;
        }
        if self.state.finished.len() == self.graph.node_count() {
            return false;
        }
        let mut whole = Self {
            graph: self.graph,
            start: self.start,
            state: self.state.clone(),
        };
        whole.explore_remaining();
        !whole.state.back_links.is_empty()
    }

    fn log_summary(&self) {
        debug!(
            visited = self.state.finished.len(),
            edges = self.state.edge_count,
            back_links = self.state.back_links.len(),
            "dfs complete"
        );
    }

    fn explore(&mut self, root: usize) {
        let graph = self.graph;
        let undirected = !graph.is_directed();
        let state = &mut self.state;

        let pre = state.discover(root, None);
        state.low[root] = Some(pre);
        let mut stack = vec![(root, graph.adjacent(root))];

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let Some((v, _)) = frame.1.next() else {
                stack.pop();
                state.finish(u);
                if let Some(parent) = state.structure[u] {
                    state.low[parent] = min_option(state.low[parent], state.low[u]);
                }
                continue;
            };

            state.edge_count += 1;
            let pre_u = state.pre[u];
            match state.pre[v] {
                None => {
                    state.tree_links.insert(u, v);
                    let pre_v = state.discover(v, Some(u));
                    state.low[v] = Some(pre_v);
                    stack.push((v, graph.adjacent(v)));
                }
                Some(_) if undirected && state.structure[u] == Some(v) => {
                    state.parent_links.insert(u, v);
                }
                Some(pre_v) if pre_u < Some(pre_v) => {
                    state.down_links.insert(u, v);
                    state.low[u] = min_option(state.low[u], Some(pre_v));
                }
                Some(pre_v) if state.post[v].is_none() => {
                    state.back_links.insert(u, v);
                    state.low[u] = min_option(state.low[u], Some(pre_v));
                }
                Some(_) => {
                    state.cross_links.insert(u, v);
                }
            }
        }
    }

    /// Edges to an already-finished node in another subtree. Only directed
    /// graphs produce them.
    pub fn cross_links(&self) -> &Links {
        &self.state.cross_links
    }

    /// Tree edges `(parent, child)` whose removal disconnects the graph,
    /// ordered by child.
    pub fn bridges(&self) -> Vec<(usize, usize)> {
        let state = &self.state;
        (0..state.node_count())
            .filter_map(|v| {
                let parent = state.structure(v)?;
                (state.low(v) == state.pre(v)).then_some((parent, v))
            })
            .collect()
    }

    /// Nodes whose removal disconnects the graph, ascending.
    pub fn articulation_points(&self) -> Vec<usize> {
        let state = &self.state;
        (0..state.node_count())
            .filter(|&u| {
                let Some(pre_u) = state.pre(u) else {
                    return false;
                };
                let children = state.tree_links.get(u);
                if state.structure(u).is_none() {
                    children.len() >= 2
                } else {
                    children
                        .iter()
                        .any(|&v| state.low(v).is_some_and(|low| low >= pre_u))
                }
            })
            .collect()
    }

    /// Root-first path from the traversal root to `target` along tree links.
    ///
    /// # Errors
    /// [`Error::Range`] for an unknown node, [`Error::Unreachable`] if the
    /// run never visited `target`.
    pub fn simple_path(&self, target: usize) -> Result<Vec<usize>> {
        self.state.path_to(target)
    }

    /// Visited nodes in ascending finish order.
    pub fn post_order(&self) -> &[usize] {
        &self.state.finished
    }

    /// The `pre`, `low`, `post`, `structure` and `colour` rows.
    pub fn diagnostics(&self) -> Diagnostics {
        self.state.diagnostics(true)
    }
}

impl<S: NeighborStore> Traversal for Dfs<'_, S> {
    fn state(&self) -> &SearchState {
        &self.state
    }
}

#[inline]
fn min_option(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
