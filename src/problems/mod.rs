//! Problem implementations for the DP engine.
//!
//! These modules implement [`SequenceDp`](crate::traits::SequenceDp) for
//! the two recurrences this crate ships:
//! - [`lcs`]  : Longest Common Subsequence, with table backtracking.
//! - [`lccs`] : Longest Common Contiguous Subsequence (longest common run).

pub mod lccs;
pub mod lcs;
