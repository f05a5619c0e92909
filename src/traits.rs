//! Core trait definitions for two-sequence dynamic programs.
//!
//! Both engines in this crate share the same shape: a table indexed by
//! prefix lengths `(i, j)` of two sequences `s` (length `n`) and `t`
//! (length `m`), filled one row at a time. [`SequenceDp`] captures that
//! shape so that [`DpEngine`](crate::engine::DpEngine) can drive either a
//! rolling pass (two live rows) or a full table pass without knowing the
//! recurrence.
//!
//! Layers are rows of the table:
//! - layer 0 is the base row (all zero for every problem in this crate),
//! - `forward_step(i, ..)` maps row `i` to row `i + 1` by consuming `s[i]`,
//! - after `n` steps the frontier holds row `n`.

use crate::table::DpTable;

/// A dynamic program over two sequences, expressed row by row.
///
/// An implementation corresponds to a *fixed* instance: in practice a struct
/// borrowing the two input sequences.
pub trait SequenceDp {
    /// Element type of the reconstructed solution.
    type Token: Clone;

    /// One DP row plus whatever running state the recurrence needs
    /// (for example the best cell seen so far).
    type Frontier: Clone;

    /// Objective value read off the final frontier.
    type Cost: Copy + Ord;

    /// Number of forward steps, i.e. `n = s.len()`.
    fn num_layers(&self) -> usize;

    /// Number of cells per row, i.e. `m + 1`.
    fn width(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Compute row `layer + 1` from row `layer`, writing into `next`.
    ///
    /// Requirements:
    /// - must only read `prev` and fixed problem data,
    /// - must overwrite every cell of `next` (it may hold a stale row).
    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier);

    /// View the DP cells of a frontier; the slice has length [`width`](Self::width).
    fn cells<'f>(&self, frontier: &'f Self::Frontier) -> &'f [u32];

    /// Objective value held by the frontier at layer `n`.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;

    /// Recover one optimal solution from the full table and the final frontier.
    fn reconstruct(&self, table: &DpTable, frontier_t: &Self::Frontier) -> Vec<Self::Token>;
}
