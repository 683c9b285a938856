//! `PriorityQueue`: a binary heap of element ids keyed by external weights.
//!
//! The heap stores node ids, never weights. Keys are read from a weight slice
//! the caller owns and passes in on every call, so the caller is free to mutate
//! a weight between calls and then ask the heap to restore order with
//! [`PriorityQueue::change`]. A position index maps each id to its heap slot,
//! which makes `change` O(log n) instead of a linear search.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `from_weights` | \(O(n)\) | Bottom-up heapify |
//! | `push` | \(O(\log n)\) | Sift up |
//! | `pop` | \(O(\log n)\) | Swap with last, sift down |
//! | `change` | \(O(\log n)\) | Position lookup is \(O(1)\) |
//! | `contains` | \(O(1)\) | |
//!
//! Ties between equal weights are broken arbitrarily.

use crate::error::{Error, Result};

const ABSENT: usize = usize::MAX;

/// Which extreme [`PriorityQueue::pop`] extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Smallest weight first (min-heap).
    #[default]
    Ascending,
    /// Largest weight first (max-heap).
    Descending,
}

/// A decrease-key (and increase-key) binary heap over element ids.
///
/// All weight-reading methods take the weight slice explicitly; passing a
/// different slice than the one the heap was built against breaks the heap
/// property.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    /// Heap-ordered element ids.
    heap: Vec<usize>,
    /// `position[id]` is the slot of `id` in `heap`, or `ABSENT`.
    position: Vec<usize>,
    order: HeapOrder,
}

impl PriorityQueue {
    /// Creates an empty heap able to hold ids in `[0, capacity)`.
    pub fn new(capacity: usize, order: HeapOrder) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![ABSENT; capacity],
            order,
        }
    }

    /// Builds a heap holding every id in `[0, weights.len())`.
    pub fn from_weights(weights: &[f64], order: HeapOrder) -> Self {
        let n = weights.len();
        let mut queue = Self {
            heap: (0..n).collect(),
            position: (0..n).collect(),
            order,
        };
        for slot in (0..n / 2).rev() {
            queue.sift_down(weights, slot);
        }
        queue
    }

    /// Returns the number of ids currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the configured ordering.
    #[inline]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns `true` if `id` is currently queued.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.position.get(id).is_some_and(|&slot| slot != ABSENT)
    }

    /// Inserts `id`, keyed by `weights[id]`.
    ///
    /// Inserting an id that is already queued re-keys it instead.
    ///
    /// # Panics
    /// Panics if `id >= weights.len()`.
    pub fn push(&mut self, weights: &[f64], id: usize) {
        assert!(id < weights.len(), "id {id} has no weight (len {})", weights.len());
        if id >= self.position.len() {
            self.position.resize(id + 1, ABSENT);
        }
        if self.contains(id) {
            self.change(weights, id);
            return;
        }
        let slot = self.heap.len();
        self.heap.push(id);
        self.position[id] = slot;
        self.sift_up(weights, slot);
    }

    /// Returns the id at the extreme of the configured ordering without removing it.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(Error::Empty("priority queue"))
    }

    /// Removes and returns the id at the extreme of the configured ordering.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the heap is empty.
    pub fn pop(&mut self, weights: &[f64]) -> Result<usize> {
        if self.heap.is_empty() {
            return Err(Error::Empty("priority queue"));
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let id = self.heap.pop().ok_or(Error::Empty("priority queue"))?;
        self.position[id] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(weights, 0);
        }
        Ok(id)
    }

    /// Restores heap order after the caller changed `weights[id]`.
    ///
    /// Works for both decreases and increases. Returns `false` (and does
    /// nothing) when `id` is not queued.
    pub fn change(&mut self, weights: &[f64], id: usize) -> bool {
        if !self.contains(id) {
            return false;
        }
        let slot = self.position[id];
        let slot = self.sift_up(weights, slot);
        self.sift_down(weights, slot);
        true
    }

    /// Removes every id.
    pub fn clear(&mut self) {
        for &id in &self.heap {
            self.position[id] = ABSENT;
        }
        self.heap.clear();
    }

    /// Returns `true` if `a` must sit above `b` in the heap.
    #[inline(always)]
    fn precedes(&self, weights: &[f64], a: usize, b: usize) -> bool {
        let (wa, wb) = (weights[self.heap[a]], weights[self.heap[b]]);
        match self.order {
            HeapOrder::Ascending => wa < wb,
            HeapOrder::Descending => wa > wb,
        }
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = a;
        self.position[self.heap[b]] = b;
    }

    /// Moves the element at `slot` up; returns its final slot.
    fn sift_up(&mut self, weights: &[f64], mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.precedes(weights, slot, parent) {
                self.swap(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    fn sift_down(&mut self, weights: &[f64], mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.precedes(weights, right, left) {
                best = right;
            }
            if self.precedes(weights, best, slot) {
                self.swap(slot, best);
                slot = best;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_heap(&self, weights: &[f64]) -> bool {
        (1..self.heap.len()).all(|slot| !self.precedes(weights, slot, (slot - 1) / 2))
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, &id)| self.position[id] == slot)
    }
}
