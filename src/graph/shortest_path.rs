//! Single-source shortest paths (Dijkstra) over a decrease-key heap.
//!
//! Every node starts in the heap keyed by its tentative distance
//! ([`MAXWEIGHT`] for "not reached yet"). Relaxing an edge lowers the key in
//! place via [`PriorityQueue::change`].
//!
//! Edge weights must be non-negative. This is a precondition, not checked;
//! negative weights give undefined (but memory-safe) results.

use tracing::{debug, trace};

use crate::collections::{HeapOrder, PriorityQueue, MAXWEIGHT};
use crate::error::{Error, Result};
use crate::graph::{saturating_add, Diagnostics, Graph, NeighborStore};

/// A Dijkstra run from one source over a borrowed graph.
///
/// ```
/// use leafy::{Dijkstra, SparseGraph};
///
/// let mut graph = SparseGraph::new(3, true);
/// graph.add_weighted_edge(0, 1, 0.5).unwrap();
/// graph.add_weighted_edge(1, 2, 0.25).unwrap();
/// graph.add_weighted_edge(0, 2, 1.0).unwrap();
///
/// let mut dijkstra = Dijkstra::new(&graph, 0).unwrap();
/// dijkstra.run();
/// assert_eq!(dijkstra.path(2).unwrap(), vec![0, 1, 2]);
/// assert_eq!(dijkstra.weight(2).unwrap(), 0.75);
/// ```
pub struct Dijkstra<'g, S> {
    graph: &'g Graph<S>,
    source: usize,
    distance: Vec<f64>,
    structure: Vec<Option<usize>>,
    /// Nodes in the order they were settled.
    settled: Vec<usize>,
    edge_count: usize,
}

impl<'g, S: NeighborStore> Dijkstra<'g, S> {
    /// Prepares a run over `graph` from `source`.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `source` is not a node of `graph`.
    pub fn new(graph: &'g Graph<S>, source: usize) -> Result<Self> {
        let n = graph.node_count();
        Error::check_node(source, n)?;
        Ok(Self {
            graph,
            source,
            distance: vec![MAXWEIGHT; n],
            structure: vec![None; n],
            settled: Vec::new(),
            edge_count: 0,
        })
    }

    /// The source node.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Computes all distances from the source, discarding previous results.
    pub fn run(&mut self) {
        let graph = self.graph;
        let n = graph.node_count();
        self.distance = vec![MAXWEIGHT; n];
        self.distance[self.source] = 0.0;
        self.structure = vec![None; n];
        self.settled.clear();
        self.edge_count = 0;
        debug!(source = self.source, nodes = n, "dijkstra run");

        let mut queue = PriorityQueue::from_weights(&self.distance, HeapOrder::Ascending);
        while let Ok(u) = queue.pop(&self.distance) {
            let du = self.distance[u];
            if du >= MAXWEIGHT {
                // Everything left in the heap is unreachable.
                break;
            }
            self.settled.push(u);

            for (v, w) in graph.adjacent(u) {
                self.edge_count += 1;
                if !queue.contains(v) {
                    continue;
                }
                let candidate = saturating_add(du, w);
                if candidate < self.distance[v] {
                    trace!(node = v, from = u, distance = candidate, "relax");
                    self.distance[v] = candidate;
                    self.structure[v] = Some(u);
                    queue.change(&self.distance, v);
                }
            }
        }

        debug!(
            settled = self.settled.len(),
            edges = self.edge_count,
            "dijkstra complete"
        );
    }

    /// Minimum-weight path from the source to `target`, source first.
    ///
    /// # Errors
    /// [`Error::Range`] for an unknown node, [`Error::Unreachable`] if no
    /// path exists.
    pub fn path(&self, target: usize) -> Result<Vec<usize>> {
        self.weight(target)?;
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(parent) = self.structure[cursor] {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Total weight of the minimum-weight path to `target`.
    ///
    /// An unreached node is an error here rather than the [`MAXWEIGHT`]
    /// sentinel; the raw sentinel distance is still available through
    /// [`Dijkstra::distances`].
    ///
    /// # Errors
    /// [`Error::Range`] for an unknown node, [`Error::Unreachable`] if no
    /// path exists.
    pub fn weight(&self, target: usize) -> Result<f64> {
        Error::check_node(target, self.distance.len())?;
        let distance = self.distance[target];
        if distance >= MAXWEIGHT {
            return Err(Error::Unreachable { node: target });
        }
        Ok(distance)
    }

    /// Tentative distances; [`MAXWEIGHT`] for unreached nodes.
    pub fn distances(&self) -> &[f64] {
        &self.distance
    }

    /// Shortest-path-tree parent of `node`.
    pub fn structure(&self, node: usize) -> Option<usize> {
        self.structure.get(node).copied().flatten()
    }

    /// Nodes in the order they were settled (non-decreasing distance).
    pub fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// Reached nodes, ascending.
    pub fn visited(&self) -> Vec<usize> {
        (0..self.distance.len())
            .filter(|&u| self.distance[u] < MAXWEIGHT)
            .collect()
    }

    /// Edges relaxed or inspected during the run.
    pub fn visited_edge_count(&self) -> usize {
        self.edge_count
    }

    /// The `structure` and `settled` (settle order index) rows.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut order = vec![None; self.distance.len()];
        for (i, &u) in self.settled.iter().enumerate() {
            order[u] = Some(i);
        }
        Diagnostics::new(self.edge_count)
            .with_row("structure", self.structure.clone())
            .with_row("settled", order)
    }
}
