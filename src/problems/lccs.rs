//! Longest Common Contiguous Subsequence (LCCS), i.e. longest common
//! substring over tokens.
//!
//! Cell `T[i][j]` is the length of the common run ending exactly at
//! `s[i-1]` and `t[j-1]`. It resets to zero on a mismatch instead of
//! carrying the neighbours forward as the LCS table does.
//!
//! The frontier carries the best cell seen so far. Rows are scanned with
//! `i` ascending and `j` ascending inside a row, and only a strictly longer
//! run replaces the current best, so the first maximal run wins.

use std::ops::Range;

use crate::table::DpTable;
use crate::traits::SequenceDp;

#[derive(Clone)]
pub struct LccsProblem<'a, T> {
    pub s: &'a [T],
    pub t: &'a [T],
}

/// Where the longest common run sits in both inputs.
///
/// `end_s` and `end_t` are 0-based indices of the run's last element and are
/// only meaningful when `len > 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunLocation {
    pub len: usize,
    pub end_s: usize,
    pub end_t: usize,
}

impl RunLocation {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Half-open range of the run inside `s`; empty when there is no run.
    pub fn span_s(&self) -> Range<usize> {
        Self::span(self.len, self.end_s)
    }

    /// Half-open range of the run inside `t`; empty when there is no run.
    pub fn span_t(&self) -> Range<usize> {
        Self::span(self.len, self.end_t)
    }

    fn span(len: usize, end: usize) -> Range<usize> {
        if len == 0 {
            0..0
        } else {
            end + 1 - len..end + 1
        }
    }
}

#[derive(Clone, Debug)]
pub struct LccsFrontier {
    pub runs: Vec<u32>, // length = t.len() + 1
    pub best: RunLocation,
}

impl<'a, T: PartialEq + Clone> LccsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    fn m(&self) -> usize {
        self.t.len()
    }

    /// Best run, found with the rolling pass.
    pub fn locate(&self) -> RunLocation {
        crate::DpEngine::new(self.clone()).final_frontier().best
    }

    /// Full run table together with the best run.
    pub fn run_table(&self) -> (DpTable, RunLocation) {
        let (table, frontier_t) = crate::DpEngine::new(self.clone()).table();
        (table, frontier_t.best)
    }
}

impl<'a, T: PartialEq + Clone> SequenceDp for LccsProblem<'a, T> {
    type Token = T;
    type Frontier = LccsFrontier;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.s.len()
    }

    fn width(&self) -> usize {
        self.m() + 1
    }

    fn init_frontier(&self) -> Self::Frontier {
        LccsFrontier {
            runs: vec![0; self.m() + 1],
            best: RunLocation::default(),
        }
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
        let x = &self.s[layer];
        let mut best = prev.best;
        let row = &mut next.runs;

        row[0] = 0;
        for (j, y) in self.t.iter().enumerate() {
            let run = if x == y { prev.runs[j] + 1 } else { 0 };
            row[j + 1] = run;
            if run as usize > best.len {
                best = RunLocation {
                    len: run as usize,
                    end_s: layer,
                    end_t: j,
                };
            }
        }
        next.best = best;
    }

    fn cells<'f>(&self, frontier: &'f Self::Frontier) -> &'f [u32] {
        &frontier.runs
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.best.len
    }

    fn reconstruct(&self, _table: &DpTable, frontier_t: &Self::Frontier) -> Vec<Self::Token> {
        // An empty run must not fall through to slice arithmetic on `end_s`.
        if frontier_t.best.is_empty() {
            return Vec::new();
        }
        self.s[frontier_t.best.span_s()].to_vec()
    }
}
