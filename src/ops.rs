//! Plain numeric-array entry points.
//!
//! Every function takes two `f64` sequences whose elements are compared with
//! `==` and no tolerance, so `NaN` never matches and `-0.0` matches `0.0`.
//! All of them are total: empty inputs yield zero lengths, empty sequences and
//! all-zero tables of the reduced shape.

use crate::engine::DpEngine;
use crate::problems::lccs::{LccsProblem, RunLocation};
use crate::problems::lcs::LcsProblem;
use crate::table::DpTable;

/// Full `(n + 1) × (m + 1)` LCS table.
pub fn lcs_table(seq1: &[f64], seq2: &[f64]) -> DpTable {
    DpEngine::new(LcsProblem::new(seq1, seq2)).table().0
}

/// Length of the longest common subsequence.
pub fn lcs_length(seq1: &[f64], seq2: &[f64]) -> usize {
    DpEngine::new(LcsProblem::new(seq1, seq2)).cost()
}

/// One longest common subsequence, drawn from `seq1`.
pub fn lcs(seq1: &[f64], seq2: &[f64]) -> Vec<f64> {
    DpEngine::new(LcsProblem::new(seq1, seq2)).run().1
}

/// Full run table plus the location of the first longest common run.
pub fn lccs_table(seq1: &[f64], seq2: &[f64]) -> (DpTable, RunLocation) {
    LccsProblem::new(seq1, seq2).run_table()
}

/// Length of the longest common contiguous run.
pub fn lccs_length(seq1: &[f64], seq2: &[f64]) -> usize {
    DpEngine::new(LccsProblem::new(seq1, seq2)).cost()
}

/// The first longest common contiguous run, as a slice copied out of `seq1`.
pub fn lccs(seq1: &[f64], seq2: &[f64]) -> Vec<f64> {
    DpEngine::new(LccsProblem::new(seq1, seq2)).run().1
}
