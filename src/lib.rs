//! Longest common subsequence engines over token sequences.
//!
//! This crate computes two classic dynamic programs over a pair of finite
//! sequences `s` (length `n`) and `t` (length `m`):
//!
//! - **LCS**: the longest subsequence of both inputs (not necessarily
//!   contiguous), its length and the full `(n + 1) × (m + 1)` DP table.
//! - **LCCS**: the longest run of consecutive elements present in both
//!   inputs (longest common substring over tokens) and its length.
//!
//! Elements are opaque tokens compared with `==` only. The [`ops`] layer
//! fixes the token type to `f64`; the engines themselves accept any
//! `T: PartialEq + Clone`.
//!
//! ## Core idea
//! 1. Each recurrence implements [`SequenceDp`]: a table filled one row
//!    (one prefix of `s`) at a time.
//! 2. [`DpEngine`] runs a rolling two-row pass for length queries, or a full
//!    table pass for the table and an explicit solution.
//!
//! ## Quick start
//! ```
//! use seqdp::{lcs, lcs_length, lccs, lccs_length};
//!
//! let s1 = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let s2 = [2.0, 4.0, 5.0];
//! assert_eq!(lcs_length(&s1, &s2), 3);
//! assert_eq!(lcs(&s1, &s2), vec![2.0, 4.0, 5.0]);
//! assert_eq!(lccs_length(&s1, &s2), 2);
//! assert_eq!(lccs(&s1, &s2), vec![4.0, 5.0]);
//! ```
//!
//! Every call is pure and allocates its own table, so independent pairs can
//! be processed concurrently; see [`batch`].

pub mod batch;
pub mod builder;
pub mod engine;
pub mod ops;
pub mod problems;
pub mod similarity;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::{DpEngine, LengthStrategy};
pub use crate::ops::{lccs, lccs_length, lccs_table, lcs, lcs_length, lcs_table};
pub use crate::problems::lccs::RunLocation;
pub use crate::table::DpTable;
pub use crate::traits::SequenceDp;
