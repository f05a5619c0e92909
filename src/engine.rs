//! Generic row-by-row DP engine.
//!
//! This module implements the two passes every problem in the crate needs:
//! 1. A rolling pass that keeps two live rows and returns the final
//!    frontier, used for length-only queries in O(m) memory.
//! 2. A full table pass that materialises every row into a [`DpTable`],
//!    used to return the table and to reconstruct an optimal solution.
//!
//! The engine is completely generic over implementations of [`SequenceDp`].

use crate::table::DpTable;
use crate::traits::SequenceDp;

/// Which pass answers length-only queries.
///
/// Both strategies return identical values; they differ only in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthStrategy {
    /// Two rows of `m + 1` cells.
    #[default]
    Rolling,
    /// Build the full `(n + 1) × (m + 1)` table and read the answer from it.
    FullTable,
}

/// DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use seqdp::{DpEngine, problems::lcs::LcsProblem};
///
/// let s = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let t = [2.0, 4.0, 5.0];
/// let engine = DpEngine::new(LcsProblem::new(&s, &t));
/// let (len, lcs) = engine.run();
/// assert_eq!(len, 3);
/// assert_eq!(lcs, vec![2.0, 4.0, 5.0]);
/// ```
pub struct DpEngine<P: SequenceDp> {
    problem: P,
    strategy: LengthStrategy,
}

impl<P: SequenceDp> DpEngine<P> {
    /// Create a new engine using the default [`LengthStrategy`].
    pub fn new(problem: P) -> Self {
        Self::with_strategy(problem, LengthStrategy::default())
    }

    /// Create a new engine with an explicit length strategy.
    pub fn with_strategy(problem: P, strategy: LengthStrategy) -> Self {
        Self { problem, strategy }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured length strategy.
    pub fn strategy(&self) -> LengthStrategy {
        self.strategy
    }

    /// True when either input is empty, so every cell is a base case.
    pub fn is_degenerate(&self) -> bool {
        self.problem.num_layers() == 0 || self.problem.width() <= 1
    }

    /// Rolling pass: return the frontier at layer `n` using two live rows.
    pub fn final_frontier(&self) -> P::Frontier {
        let mut prev = self.problem.init_frontier();
        if self.is_degenerate() {
            return prev;
        }
        let mut next = prev.clone();
        for layer in 0..self.problem.num_layers() {
            self.problem.forward_step(layer, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
        }
        prev
    }

    /// Objective value, computed with the configured [`LengthStrategy`].
    pub fn cost(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "dp_cost",
            rows = self.problem.num_layers() + 1,
            cols = self.problem.width(),
            strategy = ?self.strategy
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match self.strategy {
            LengthStrategy::Rolling => self.problem.extract_cost(&self.final_frontier()),
            LengthStrategy::FullTable => {
                let (_table, frontier_t) = self.table();
                self.problem.extract_cost(&frontier_t)
            }
        }
    }

    /// Full table pass.
    ///
    /// Returns the `(n + 1) × (m + 1)` table together with the frontier at
    /// layer `n`.
    ///
    /// # Panics
    /// Panics if the problem's frontier rows are not [`width`](SequenceDp::width)
    /// cells long, or if the table size overflows `usize`.
    pub fn table(&self) -> (DpTable, P::Frontier) {
        let rows = self.problem.num_layers() + 1;
        let cols = self.problem.width();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_table", rows, cols);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = DpTable::zeroed(rows, cols);
        let mut prev = self.problem.init_frontier();
        table.row_mut(0).copy_from_slice(self.problem.cells(&prev));
        if self.is_degenerate() {
            return (table, prev);
        }

        let mut next = prev.clone();
        for layer in 0..self.problem.num_layers() {
            self.problem.forward_step(layer, &prev, &mut next);
            table
                .row_mut(layer + 1)
                .copy_from_slice(self.problem.cells(&next));
            std::mem::swap(&mut prev, &mut next);
        }
        (table, prev)
    }

    /// Build the table and reconstruct one optimal solution.
    ///
    /// Returns `(optimal_cost, solution)`. Degenerate inputs skip the table
    /// entirely and return an empty solution.
    pub fn run(&self) -> (P::Cost, Vec<P::Token>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if self.is_degenerate() {
            let frontier = self.problem.init_frontier();
            return (self.problem.extract_cost(&frontier), Vec::new());
        }

        let (table, frontier_t) = self.table();
        let solution = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("reconstruct", rows = table.rows(), cols = table.cols());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.reconstruct(&table, &frontier_t)
        };
        (self.problem.extract_cost(&frontier_t), solution)
    }
}
