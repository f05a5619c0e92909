//! Longest Common Subsequence (LCS) as a row-by-row DP.
//!
//! We treat layers as prefix lengths of `s` (0..=n), and the frontier at
//! layer `i` is the DP row for LCS(s[0..i], t[0..=m]):
//!
//! ```text
//! T[i][j] = T[i-1][j-1] + 1              if s[i-1] == t[j-1]
//!         = max(T[i-1][j], T[i][j-1])    otherwise
//! ```
//!
//! Reconstruction walks the full table back from `(n, m)`. When
//! `T[i-1][j] == T[i][j-1]` the walk steps left (decrements `j`), which fixes
//! which of several equally long subsequences is returned.

use crate::table::DpTable;
use crate::traits::SequenceDp;

#[derive(Clone)]
pub struct LcsProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

/// Frontier row: LCS length for all prefixes of `t` at a fixed `i`.
#[derive(Clone, Debug)]
pub struct LcsFrontier {
    pub scores: Vec<u32>, // length = t.len() + 1
}

impl<'a, T: PartialEq + Clone> LcsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    fn n(&self) -> usize {
        self.s.len()
    }

    fn m(&self) -> usize {
        self.t.len()
    }

    /// Index pairs `(i, j)` with `s[i] == t[j]` forming one LCS, ascending.
    ///
    /// `table` must be the full table for this instance.
    pub fn matched_pairs(&self, table: &DpTable) -> Vec<(usize, usize)> {
        debug_assert_eq!((table.rows(), table.cols()), (self.n() + 1, self.m() + 1));

        let mut i = self.n();
        let mut j = self.m();
        let mut rev_pairs = Vec::with_capacity(table.corner() as usize);

        while i > 0 && j > 0 {
            if self.s[i - 1] == self.t[j - 1] {
                rev_pairs.push((i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if table[(i - 1, j)] > table[(i, j - 1)] {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        rev_pairs.reverse();
        rev_pairs
    }
}

impl<'a, T: PartialEq + Clone> SequenceDp for LcsProblem<'a, T> {
    type Token = T;
    type Frontier = LcsFrontier;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        // each step consumes one element of s
        self.n()
    }

    fn width(&self) -> usize {
        self.m() + 1
    }

    fn init_frontier(&self) -> Self::Frontier {
        // i = 0: LCS(ε, t[0..j]) = 0
        LcsFrontier {
            scores: vec![0; self.m() + 1],
        }
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
        let x = &self.s[layer];
        let up = &prev.scores;
        let row = &mut next.scores;

        row[0] = 0;
        for (j, y) in self.t.iter().enumerate() {
            // row[j + 1] is cell (layer + 1, j + 1)
            row[j + 1] = if x == y {
                up[j] + 1
            } else {
                up[j + 1].max(row[j])
            };
        }
    }

    fn cells<'f>(&self, frontier: &'f Self::Frontier) -> &'f [u32] {
        &frontier.scores
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        // Global LCS length at (n, m).
        frontier_t.scores.last().copied().unwrap_or(0) as usize
    }

    fn reconstruct(&self, table: &DpTable, _frontier_t: &Self::Frontier) -> Vec<Self::Token> {
        self.matched_pairs(table)
            .into_iter()
            .map(|(i, _)| self.s[i].clone())
            .collect()
    }
}
