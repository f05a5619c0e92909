//! Assorted utilities and helpers.
//!
//! Sizing for DP tables, plus the two structural predicates the tests and
//! the probe binary use to check reconstructed answers.

/// Number of cells in a `rows × cols` table.
///
/// # Panics
/// Panics if the product overflows `usize`.
#[inline]
pub fn table_cells(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols)
        .expect("DP table dimensions overflow usize")
}

/// Returns true if `needle` occurs in order (not necessarily contiguously)
/// inside `haystack`.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}

/// Position of the first contiguous occurrence of `needle` in `haystack`.
///
/// An empty needle occurs at position 0.
pub fn find_run<T: PartialEq>(needle: &[T], haystack: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
