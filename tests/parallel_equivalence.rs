#![cfg(feature = "parallel")]

use proptest::prelude::*;
use seqdp::batch::{lccs_lengths, lccs_many, lcs_lengths, lcs_many, SeqPair};
use seqdp::{lccs, lccs_length, lcs, lcs_length};

fn pair_list() -> impl Strategy<Value = Vec<(Vec<f64>, Vec<f64>)>> {
    let seq = proptest::collection::vec((0u8..4).prop_map(f64::from), 0..12);
    proptest::collection::vec((seq.clone(), seq), 0..24)
}

proptest! {
    #[test]
    fn batch_matches_sequential(pairs in pair_list()) {
        let refs: Vec<SeqPair<'_, f64>> = pairs
            .iter()
            .map(|(s, t)| (s.as_slice(), t.as_slice()))
            .collect();

        let expected_lcs: Vec<usize> = pairs.iter().map(|(s, t)| lcs_length(s, t)).collect();
        let expected_lccs: Vec<usize> = pairs.iter().map(|(s, t)| lccs_length(s, t)).collect();
        prop_assert_eq!(lcs_lengths(&refs), expected_lcs);
        prop_assert_eq!(lccs_lengths(&refs), expected_lccs);

        let expected_lcs_seqs: Vec<Vec<f64>> = pairs.iter().map(|(s, t)| lcs(s, t)).collect();
        let expected_lccs_seqs: Vec<Vec<f64>> = pairs.iter().map(|(s, t)| lccs(s, t)).collect();
        prop_assert_eq!(lcs_many(&refs), expected_lcs_seqs);
        prop_assert_eq!(lccs_many(&refs), expected_lccs_seqs);
    }
}
