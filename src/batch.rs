//! Many-pair versions of the length and sequence queries.
//!
//! Each pair is independent, so with the `parallel` feature the pairs are
//! spread over the rayon thread pool. Results always come back in input
//! order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::DpEngine;
use crate::problems::{lccs::LccsProblem, lcs::LcsProblem};

/// A pair of token sequences.
pub type SeqPair<'a, T> = (&'a [T], &'a [T]);

#[cfg(feature = "parallel")]
fn map_pairs<T, R, F>(pairs: &[SeqPair<'_, T>], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T], &[T]) -> R + Sync + Send,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("batch", pairs = pairs.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs.par_iter().map(|&(s, t)| f(s, t)).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_pairs<T, R, F>(pairs: &[SeqPair<'_, T>], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T], &[T]) -> R + Sync + Send,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("batch", pairs = pairs.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs.iter().map(|&(s, t)| f(s, t)).collect()
}

/// LCS length for every pair.
pub fn lcs_lengths<T>(pairs: &[SeqPair<'_, T>]) -> Vec<usize>
where
    T: PartialEq + Clone + Sync,
{
    map_pairs(pairs, |s, t| DpEngine::new(LcsProblem::new(s, t)).cost())
}

/// LCCS length for every pair.
pub fn lccs_lengths<T>(pairs: &[SeqPair<'_, T>]) -> Vec<usize>
where
    T: PartialEq + Clone + Sync,
{
    map_pairs(pairs, |s, t| DpEngine::new(LccsProblem::new(s, t)).cost())
}

/// One LCS for every pair.
pub fn lcs_many<T>(pairs: &[SeqPair<'_, T>]) -> Vec<Vec<T>>
where
    T: PartialEq + Clone + Send + Sync,
{
    map_pairs(pairs, |s, t| DpEngine::new(LcsProblem::new(s, t)).run().1)
}

/// The first longest common run for every pair.
pub fn lccs_many<T>(pairs: &[SeqPair<'_, T>]) -> Vec<Vec<T>>
where
    T: PartialEq + Clone + Send + Sync,
{
    map_pairs(pairs, |s, t| DpEngine::new(LccsProblem::new(s, t)).run().1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_input_order() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 5.0];
        let c = [7.0];
        let empty: [f64; 0] = [];
        let pairs: Vec<SeqPair<'_, f64>> = vec![
            (&a[..], &b[..]),
            (&a[..], &c[..]),
            (&b[..], &b[..]),
            (&empty[..], &a[..]),
        ];
        assert_eq!(lcs_lengths(&pairs), vec![3, 0, 3, 0]);
        assert_eq!(lccs_lengths(&pairs), vec![2, 0, 3, 0]);
        assert_eq!(
            lcs_many(&pairs),
            vec![vec![2.0, 4.0, 5.0], vec![], b.to_vec(), vec![]]
        );
        assert_eq!(
            lccs_many(&pairs),
            vec![vec![4.0, 5.0], vec![], b.to_vec(), vec![]]
        );
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<SeqPair<'_, f64>> = Vec::new();
        assert!(lcs_lengths(&pairs).is_empty());
        assert!(lccs_many(&pairs).is_empty());
    }
}
