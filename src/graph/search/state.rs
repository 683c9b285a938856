//! Per-run traversal state shared by the depth-first and breadth-first engines.
//!
//! All per-node data lives in parallel vectors indexed by node id. `None`
//! marks "not assigned": an unvisited node has no `pre`, and a traversal root
//! has no `structure` parent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Edges of one classification, grouped by source node.
///
/// Neighbor lists keep the order in which the traversal examined them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links {
    by_source: BTreeMap<usize, Vec<usize>>,
}

impl Links {
    pub(crate) fn insert(&mut self, u: usize, v: usize) {
        self.by_source.entry(u).or_default().push(v);
    }

    /// Targets recorded for `u`, empty if none.
    pub fn get(&self, u: usize) -> &[usize] {
        self.by_source.get(&u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `u -> v` was recorded.
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.get(u).contains(&v)
    }

    /// Every recorded `(u, v)`, by ascending `u`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_source
            .iter()
            .flat_map(|(&u, targets)| targets.iter().map(move |&v| (u, v)))
    }

    /// Iterates `(u, targets)` by ascending `u`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.by_source.iter().map(|(&u, t)| (u, t.as_slice()))
    }

    /// Total number of recorded edges.
    pub fn len(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }
}

/// One labelled per-node row of [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRow {
    /// Row label, e.g. `"pre"`.
    pub label: &'static str,
    /// One entry per node; `None` where unassigned.
    pub values: Vec<Option<usize>>,
}

/// Labelled per-node arrays of a finished run, for external pretty-printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    rows: Vec<DiagnosticRow>,
    edge_count: usize,
}

impl Diagnostics {
    pub(crate) fn new(edge_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            edge_count,
        }
    }

    pub(crate) fn with_row(mut self, label: &'static str, values: Vec<Option<usize>>) -> Self {
        self.rows.push(DiagnosticRow { label, values });
        self
    }

    /// The row named `label`.
    pub fn get(&self, label: &str) -> Option<&[Option<usize>]> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.values.as_slice())
    }

    /// Row labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|row| row.label)
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[DiagnosticRow] {
        &self.rows
    }

    /// Neighbor edges examined by the run.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// The state a single traversal run produces.
///
/// Owned exclusively by the engine that created it and rebuilt from scratch
/// on every `run`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub(crate) pre: Vec<Option<usize>>,
    pub(crate) post: Vec<Option<usize>>,
    pub(crate) low: Vec<Option<usize>>,
    pub(crate) structure: Vec<Option<usize>>,
    pub(crate) colour: Vec<Option<u8>>,
    /// Nodes in the order they finished.
    pub(crate) finished: Vec<usize>,
    pub(crate) tree_links: Links,
    pub(crate) back_links: Links,
    pub(crate) down_links: Links,
    pub(crate) parent_links: Links,
    pub(crate) cross_links: Links,
    pub(crate) pre_counter: usize,
    pub(crate) edge_count: usize,
}

impl SearchState {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            pre: vec![None; node_count],
            post: vec![None; node_count],
            low: vec![None; node_count],
            structure: vec![None; node_count],
            colour: vec![None; node_count],
            ..Self::default()
        }
    }

    /// Number of nodes this state covers.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.pre.len()
    }

    /// Marks `node` discovered below `parent` and returns its pre-order index.
    pub(crate) fn discover(&mut self, node: usize, parent: Option<usize>) -> usize {
        debug_assert!(self.pre[node].is_none(), "node {node} discovered twice");
        let colour = parent.and_then(|p| self.colour[p]).map_or(0, |c| 1 - c);
        let pre = self.pre_counter;
        self.pre_counter += 1;
        self.pre[node] = Some(pre);
        self.structure[node] = parent;
        self.colour[node] = Some(colour);
        pre
    }

    /// Marks `node` finished, assigning the next post-order index.
    pub(crate) fn finish(&mut self, node: usize) {
        debug_assert!(self.post[node].is_none(), "node {node} finished twice");
        self.post[node] = Some(self.finished.len());
        self.finished.push(node);
    }

    /// Discovery index of `node`.
    #[inline]
    pub fn pre(&self, node: usize) -> Option<usize> {
        self.pre.get(node).copied().flatten()
    }

    /// Finish index of `node` (depth-first runs only).
    #[inline]
    pub fn post(&self, node: usize) -> Option<usize> {
        self.post.get(node).copied().flatten()
    }

    /// Low-link of `node` (depth-first runs only).
    #[inline]
    pub fn low(&self, node: usize) -> Option<usize> {
        self.low.get(node).copied().flatten()
    }

    /// Traversal-forest parent of `node`; `None` for roots and unvisited nodes.
    #[inline]
    pub fn structure(&self, node: usize) -> Option<usize> {
        self.structure.get(node).copied().flatten()
    }

    /// Two-colouring parity of `node`.
    #[inline]
    pub fn colour(&self, node: usize) -> Option<u8> {
        self.colour.get(node).copied().flatten()
    }

    /// Returns `true` if the run reached `node`.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        self.pre(node).is_some()
    }

    /// Walks structure pointers from `target` up to its root; returns the
    /// root-first path.
    pub(crate) fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        Error::check_node(target, self.node_count())?;
        if !self.is_visited(target) {
            return Err(Error::Unreachable { node: target });
        }
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(parent) = self.structure[cursor] {
            debug_assert!(path.len() <= self.node_count(), "structure pointers form a cycle");
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        Ok(path)
    }

    pub(crate) fn diagnostics(&self, with_dfs_rows: bool) -> Diagnostics {
        let colour = self.colour.iter().map(|c| c.map(usize::from)).collect();
        let diagnostics = Diagnostics::new(self.edge_count).with_row("pre", self.pre.clone());
        let diagnostics = if with_dfs_rows {
            diagnostics
                .with_row("low", self.low.clone())
                .with_row("post", self.post.clone())
        } else {
            diagnostics
        };
        diagnostics
            .with_row("structure", self.structure.clone())
            .with_row("colour", colour)
    }
}

/// Read-only accessors common to every traversal engine.
///
/// Implementors only supply [`Traversal::state`]; everything else is derived.
pub trait Traversal {
    /// The state produced by the last run.
    fn state(&self) -> &SearchState;

    /// Edges that discovered a new node.
    fn tree_links(&self) -> &Links {
        &self.state().tree_links
    }

    /// Edges to an earlier-discovered node that is still open.
    fn back_links(&self) -> &Links {
        &self.state().back_links
    }

    /// Edges to a later-discovered node that was already reached.
    fn down_links(&self) -> &Links {
        &self.state().down_links
    }

    /// Edges leading back to the node's own structure parent.
    fn parent_links(&self) -> &Links {
        &self.state().parent_links
    }

    /// Visited nodes, ascending.
    fn visited(&self) -> Vec<usize> {
        let state = self.state();
        (0..state.node_count()).filter(|&u| state.is_visited(u)).collect()
    }

    /// Unvisited nodes, ascending.
    fn unvisited(&self) -> Vec<usize> {
        let state = self.state();
        (0..state.node_count()).filter(|&u| !state.is_visited(u)).collect()
    }

    /// Neighbor edges examined, of every classification.
    fn visited_edge_count(&self) -> usize {
        self.state().edge_count
    }

    /// Returns `true` if no examined edge joins two nodes of the same colour.
    fn is_bipartite(&self) -> bool {
        let state = self.state();
        state
            .tree_links
            .pairs()
            .chain(state.back_links.pairs())
            .chain(state.down_links.pairs())
            .chain(state.parent_links.pairs())
            .chain(state.cross_links.pairs())
            .all(|(u, v)| state.colour(u) != state.colour(v))
    }
}
