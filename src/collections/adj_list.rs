//! `AdjacencyList`: append-only per-node neighbor lists in a single edge arena.
//!
//! Every edge is one entry in a contiguous arena; each node owns a singly
//! linked chain through that arena (`head` → `next` → ...). A tail pointer per
//! node makes appends O(1) while keeping insertion order, and the arena grows
//! with `Vec`'s amortized doubling.
//!
//! Duplicate edges are kept: the list is a multigraph store. Callers that
//! want simple graphs de-duplicate before appending.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `append` | \(O(1)\) amortized | Links through the node's tail |
//! | `length` | \(O(1)\) | Cached per node |
//! | `iter` | \(O(\text{degree})\) | Follows the chain |
//! | `weight` | \(O(\text{degree})\) | Linear scan, last match wins |

/// One arena slot: an edge's target, weight, and the next slot in its chain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeEntry {
    target: usize,
    weight: f64,
    next: Option<usize>,
}

/// Per-node chain bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Chain {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

/// Sparse neighbor storage: one insertion-ordered chain per node.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList {
    chains: Vec<Chain>,
    edges: Vec<EdgeEntry>,
}

impl AdjacencyList {
    /// Creates lists for `node_count` nodes with no edges.
    pub fn new(node_count: usize) -> Self {
        Self::with_capacity(node_count, 0)
    }

    /// Creates lists for `node_count` nodes, reserving room for `edge_capacity` edges.
    pub fn with_capacity(node_count: usize, edge_capacity: usize) -> Self {
        Self {
            chains: vec![Chain::default(); node_count],
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.chains.len()
    }

    /// Total number of stored entries across all lists.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends `target` with `weight` to the end of `source`'s list.
    ///
    /// # Panics
    /// Panics if `source` or `target` is out of bounds.
    pub fn append(&mut self, source: usize, target: usize, weight: f64) {
        let n = self.node_count();
        assert!(source < n, "source {source} out of bounds for n={n}");
        assert!(target < n, "target {target} out of bounds for n={n}");

        let slot = self.edges.len();
        self.edges.push(EdgeEntry {
            target,
            weight,
            next: None,
        });

        let chain = &mut self.chains[source];
        match chain.tail {
            Some(tail) => self.edges[tail].next = Some(slot),
            None => chain.head = Some(slot),
        }
        chain.tail = Some(slot);
        chain.len += 1;
    }

    /// Number of entries in `node`'s list.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn length(&self, node: usize) -> usize {
        self.chains[node].len
    }

    /// Iterates `(target, weight)` for `node` in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn iter(&self, node: usize) -> ListIter<'_> {
        ListIter {
            edges: &self.edges,
            cursor: self.chains[node].head,
            remaining: self.chains[node].len,
        }
    }

    /// Returns the weight of the last `source -> target` entry, if any.
    pub fn weight(&self, source: usize, target: usize) -> Option<f64> {
        if source >= self.node_count() {
            return None;
        }
        self.iter(source)
            .filter(|&(v, _)| v == target)
            .last()
            .map(|(_, w)| w)
    }

    /// Copies every list out as plain neighbor vectors (the raw list dump).
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        (0..self.node_count())
            .map(|u| self.iter(u).map(|(v, _)| v).collect())
            .collect()
    }

    /// Iterates all `(source, target)` pairs, by source then insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.node_count()).flat_map(move |u| self.iter(u).map(move |(v, _)| (u, v)))
    }
}

/// Iterator over one node's chain in an [`AdjacencyList`].
#[derive(Clone)]
pub struct ListIter<'a> {
    edges: &'a [EdgeEntry],
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for ListIter<'_> {
    type Item = (usize, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = &self.edges[self.cursor?];
        self.cursor = entry.next;
        self.remaining -= 1;
        Some((entry.target, entry.weight))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ListIter<'_> {}

impl core::iter::FusedIterator for ListIter<'_> {}
