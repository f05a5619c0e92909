//! Example: Longest common contiguous run over numeric tokens.
//!
//! Run with:
//! `cargo run --example lccs`

use seqdp::{lccs, lccs_table, similarity::lccs_similarity};

fn main() {
    let s = [0.5, 1.0, 2.0, 3.0, 4.0, 9.0];
    let t = [7.0, 2.0, 3.0, 4.0, 1.0];

    let (table, location) = lccs_table(&s, &t);
    println!("run length: {}", location.len);
    println!("run in s: {:?}", location.span_s());
    println!("run in t: {:?}", location.span_t());
    println!("run: {:?}", lccs(&s, &t));
    println!("similarity: {:.3}", lccs_similarity(&s, &t));

    println!("run table:");
    for row in table.iter_rows() {
        println!("  {row:?}");
    }
}
