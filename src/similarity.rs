//! Normalized similarity scores built on the two engines.
//!
//! Both use the Dice form `2 * len / (n + m)`, so the score is `1.0` for
//! identical inputs and `0.0` when nothing is shared. Two empty inputs are
//! treated as identical.

use crate::engine::DpEngine;
use crate::problems::{lccs::LccsProblem, lcs::LcsProblem};

fn dice(shared: usize, n: usize, m: usize) -> f64 {
    if n + m == 0 {
        return 1.0;
    }
    (2.0 * shared as f64) / (n + m) as f64
}

/// LCS-based similarity in `[0.0, 1.0]`.
#[must_use]
pub fn lcs_similarity<T: PartialEq + Clone>(a: &[T], b: &[T]) -> f64 {
    let len = DpEngine::new(LcsProblem::new(a, b)).cost();
    dice(len, a.len(), b.len())
}

/// Similarity from the longest common contiguous run, in `[0.0, 1.0]`.
#[must_use]
pub fn lccs_similarity<T: PartialEq + Clone>(a: &[T], b: &[T]) -> f64 {
    let len = DpEngine::new(LccsProblem::new(a, b)).cost();
    dice(len, a.len(), b.len())
}
