//! `WeightMatrix`: a dense, square matrix of edge weights.
//!
//! Row `u` holds the weights of every `u -> v` edge in one contiguous slice.
//! Absent edges are stored as [`MAXWEIGHT`]; iterating a row skips them.
//! Storage is \(O(n^2)\) regardless of edge count.

use core::slice;

use super::MAXWEIGHT;

/// A dense `n x n` weight matrix initialized to [`MAXWEIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    data: Vec<f64>,
    size: usize,
}

impl WeightMatrix {
    /// Creates a `size x size` matrix with every cell set to [`MAXWEIGHT`].
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![MAXWEIGHT; size * size],
            size,
        }
    }

    /// Number of rows (and columns).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the weight at `(row, col)`, or `None` when out of bounds.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Writes `weight` at `(row, col)`. Last write wins.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, weight: f64) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for size {}",
            self.size
        );
        self.data[row * self.size + col] = weight;
    }

    /// Returns row `row` as a slice, including absent cells.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.size {
            let start = row * self.size;
            Some(&self.data[start..start + self.size])
        } else {
            None
        }
    }

    /// Iterates over all rows in order (the raw matrix dump).
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.size.max(1)).take(self.size)
    }

    /// Iterates `(col, weight)` for every present cell of `row` in column order.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row_iter(&self, row: usize) -> RowIter<'_> {
        let cells = self
            .row(row)
            .unwrap_or_else(|| panic!("row {row} out of bounds for size {}", self.size));
        RowIter {
            cells: cells.iter().enumerate(),
        }
    }

    /// Number of present cells in `row`.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row_len(&self, row: usize) -> usize {
        self.row_iter(row).count()
    }
}

/// Iterator over the present cells of one [`WeightMatrix`] row.
#[derive(Clone)]
pub struct RowIter<'a> {
    cells: core::iter::Enumerate<slice::Iter<'a, f64>>,
}

impl Iterator for RowIter<'_> {
    type Item = (usize, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .by_ref()
            .find(|&(_, &w)| w != MAXWEIGHT)
            .map(|(col, &w)| (col, w))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cells.size_hint().1)
    }
}

impl core::iter::FusedIterator for RowIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_iter_skips_absent_cells() {
        let mut m = WeightMatrix::new(4);
        m.set(0, 2, 1.2);
        m.set(0, 3, 1.3);
        assert_eq!(m.row_iter(0).collect::<Vec<_>>(), vec![(2, 1.2), (3, 1.3)]);
        assert_eq!(m.row_len(0), 2);
        assert_eq!(m.row_iter(1).count(), 0);
    }

    #[test]
    fn last_write_wins() {
        let mut m = WeightMatrix::new(2);
        m.set(1, 1, 3.0);
        m.set(1, 1, 0.5);
        assert_eq!(m.get(1, 1), Some(0.5));
        assert_eq!(m.get(0, 1), Some(MAXWEIGHT));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn rows_dump_matches_size() {
        let m = WeightMatrix::new(3);
        assert_eq!(m.rows().count(), 3);
        assert!(m.rows().all(|r| r.len() == 3));
        assert_eq!(WeightMatrix::new(0).rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        WeightMatrix::new(2).set(0, 2, 1.0);
    }
}
