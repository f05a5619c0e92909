//! Example: Longest Common Subsequence over numeric tokens.
//!
//! Run with:
//! `cargo run --example lcs`

use seqdp::{lcs, lcs_length, lcs_table, problems::lcs::LcsProblem, DpEngine};

fn main() {
    let s = [1.0, 2.0, 1.0, 2.0, 1.0];
    let t = [2.0, 1.0, 2.0];

    println!("LCS length: {}", lcs_length(&s, &t));
    println!("LCS: {:?}", lcs(&s, &t));

    println!("DP table:");
    for row in lcs_table(&s, &t).iter_rows() {
        println!("  {row:?}");
    }

    // The index pairs behind the reconstruction.
    let problem = LcsProblem::new(&s, &t);
    let (table, _) = DpEngine::new(problem.clone()).table();
    for (i, j) in problem.matched_pairs(&table) {
        println!("  s[{i}] == t[{j}] == {}", s[i]);
    }
}
