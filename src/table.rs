//! Flat DP table storage.
//!
//! A [`DpTable`] holds `(n + 1) × (m + 1)` cells in a single row-major
//! buffer, so cell `(i, j)` lives at `i * cols + j`.

use std::ops::Index;

use crate::utils::table_cells;

/// Row-major `(rows × cols)` table of non-negative DP values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl DpTable {
    /// All-zero table with the given dimensions.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; table_cells(rows, cols)],
        }
    }

    /// Number of rows, `n + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `m + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice of `cols` cells.
    #[inline]
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [u32] {
        let start = i * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Bottom-right cell `(n, m)`.
    #[inline]
    pub fn corner(&self) -> u32 {
        self.cells.last().copied().unwrap_or(0)
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate over rows from `0` to `n`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // chunks_exact rejects a zero chunk size; zeroed(_, 0) has no cells anyway.
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// Copy into nested rows, the shape host bindings usually hand back.
    pub fn to_nested(&self) -> Vec<Vec<usize>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&v| v as usize).collect())
            .collect()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.cells
    }
}

impl Index<(usize, usize)> for DpTable {
    type Output = u32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &u32 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::DpTable;

    #[test]
    fn zeroed_has_requested_shape() {
        let t = DpTable::zeroed(3, 4);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 4);
        assert_eq!(t.as_slice().len(), 12);
        assert!(t.as_slice().iter().all(|&v| v == 0));
        assert_eq!(t.corner(), 0);
    }

    #[test]
    fn row_major_layout() {
        let mut t = DpTable::zeroed(2, 3);
        t.row_mut(1).copy_from_slice(&[0, 5, 7]);
        assert_eq!(t[(1, 1)], 5);
        assert_eq!(t.get(1, 2), Some(7));
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 3), None);
        assert_eq!(t.corner(), 7);
        assert_eq!(t.as_slice(), &[0, 0, 0, 0, 5, 7]);
        assert_eq!(t.to_nested(), vec![vec![0, 0, 0], vec![0, 5, 7]]);
    }

    #[test]
    fn single_cell_table_iterates_once() {
        let t = DpTable::zeroed(1, 1);
        assert_eq!(t.iter_rows().count(), 1);
        assert_eq!(t.to_nested(), vec![vec![0]]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_out_of_range_panics() {
        let t = DpTable::zeroed(2, 2);
        let _ = t[(2, 0)];
    }
}
