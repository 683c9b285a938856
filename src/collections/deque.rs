//! `Queue`: a growable ring-buffer deque.
//!
//! Elements live in a contiguous buffer addressed with modular arithmetic, so
//! pushes and pops at either end never shift the stored elements. When the
//! buffer fills up it doubles and the live range is unwrapped into the new
//! storage.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: O(1) amortized
//! - Peek: O(1)
//! - Growth: O(n), amortized over the pushes that triggered it

use crate::error::{Error, Result};

const MIN_CAPACITY: usize = 8;

/// Head-to-tail iterator over a [`Queue`].
pub struct QueueIter<'a, T> {
    queue: &'a Queue<T>,
    range: core::ops::Range<usize>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        self.queue.buffer[self.queue.physical(i)].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for QueueIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        self.queue.buffer[self.queue.physical(i)].as_ref()
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

/// A double-ended queue backed by a ring buffer.
///
/// Breadth-first search uses it with FIFO discipline (`push_tail` /
/// `pop_head`), but every end is symmetric.
pub struct Queue<T> {
    /// Ring storage. Slots outside the live range are `None`.
    buffer: Vec<Option<T>>,
    /// Index of the head element.
    head: usize,
    /// Number of live elements.
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue. Does not allocate until the first push.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty queue with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the queue can hold before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Pushes an element onto the head of the queue.
    pub fn push_head(&mut self, value: T) {
        self.reserve_one();
        let cap = self.buffer.len();
        self.head = (self.head + cap - 1) % cap;
        self.buffer[self.head] = Some(value);
        self.len += 1;
    }

    /// Pushes an element onto the tail of the queue.
    pub fn push_tail(&mut self, value: T) {
        self.reserve_one();
        let slot = self.physical(self.len);
        self.buffer[slot] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn pop_head(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty("queue"));
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        value.ok_or(Error::Empty("queue"))
    }

    /// Removes and returns the tail element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn pop_tail(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty("queue"));
        }
        let slot = self.physical(self.len - 1);
        self.len -= 1;
        self.buffer[slot].take().ok_or(Error::Empty("queue"))
    }

    /// Returns a reference to the head element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn peek_head(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty("queue"));
        }
        self.buffer[self.head].as_ref().ok_or(Error::Empty("queue"))
    }

    /// Returns a reference to the tail element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn peek_tail(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty("queue"));
        }
        self.buffer[self.physical(self.len - 1)]
            .as_ref()
            .ok_or(Error::Empty("queue"))
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            range: 0..self.len,
        }
    }

    /// Maps a logical offset from the head to a buffer slot.
    #[inline(always)]
    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.buffer.len()
    }

    fn reserve_one(&mut self) {
        if self.len < self.buffer.len() {
            return;
        }
        let new_cap = (self.buffer.len() * 2).max(MIN_CAPACITY);
        let mut buffer: Vec<Option<T>> = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            let slot = self.physical(i);
            buffer.push(self.buffer[slot].take());
        }
        buffer.resize_with(new_cap, || None);
        self.buffer = buffer;
        self.head = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_head_pop_head_peek_head() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.push_head(1);
        assert!(!q.is_empty());
        q.push_head(2);
        q.push_head(3);
        assert_eq!(q.pop_head(), Ok(3));
        q.push_head(4);
        assert_eq!(q.peek_head(), Ok(&4));
        assert_eq!(q.pop_head(), Ok(4));
        assert_eq!(q.pop_head(), Ok(2));
        assert_eq!(q.pop_head(), Ok(1));
        assert!(q.is_empty());
    }

    #[test]
    fn push_tail_pop_tail_peek_tail() {
        let mut q = Queue::new();
        q.push_tail(1);
        q.push_tail(2);
        q.push_tail(3);
        assert_eq!(q.pop_tail(), Ok(3));
        q.push_tail(4);
        assert_eq!(q.peek_tail(), Ok(&4));
        assert_eq!(q.pop_tail(), Ok(4));
        assert_eq!(q.pop_tail(), Ok(2));
        assert_eq!(q.pop_tail(), Ok(1));
        assert!(q.is_empty());
    }

    #[test]
    fn fifo_through_opposite_ends() {
        let mut q = Queue::new();
        for i in 1..=4 {
            q.push_head(i);
        }
        for i in 1..=4 {
            assert_eq!(q.pop_tail(), Ok(i));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue_fails_fast() {
        let mut q: Queue<u32> = Queue::new();
        assert_eq!(q.pop_head(), Err(Error::Empty("queue")));
        assert_eq!(q.pop_tail(), Err(Error::Empty("queue")));
        assert_eq!(q.peek_head(), Err(Error::Empty("queue")));
        assert_eq!(q.peek_tail(), Err(Error::Empty("queue")));
    }

    #[test]
    fn grows_across_the_wrap_point() {
        let mut q = Queue::with_capacity(4);
        q.push_tail(2);
        q.push_tail(3);
        q.push_head(1);
        q.push_head(0);
        // Full and wrapped; the next push forces a grow.
        q.push_tail(4);
        q.push_head(-1);
        assert_eq!(q.len(), 6);
        assert!(q.capacity() >= 6);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![-1, 0, 1, 2, 3, 4]);
        assert_eq!(q.pop_tail(), Ok(4));
        assert_eq!(q.pop_head(), Ok(-1));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut q = Queue::new();
        for i in 0..20 {
            q.push_tail(i);
        }
        let cap = q.capacity();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), cap);
        q.push_tail(7);
        assert_eq!(q.pop_head(), Ok(7));
    }
}
