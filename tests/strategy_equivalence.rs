use proptest::prelude::*;
use seqdp::{
    problems::{lccs::LccsProblem, lcs::LcsProblem},
    DpEngine, DpEngineBuilder, LengthStrategy, SequenceDp,
};

fn tokens(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((0u8..4).prop_map(f64::from), 0..=max_len)
}

fn cost_with<P: SequenceDp>(problem: P, strategy: LengthStrategy) -> P::Cost {
    DpEngineBuilder::new(problem)
        .with_length_strategy(strategy)
        .build()
        .cost()
}

proptest! {
    #[test]
    fn lcs_rolling_equals_full_table(s in tokens(16), t in tokens(16)) {
        let rolling = cost_with(LcsProblem::new(&s, &t), LengthStrategy::Rolling);
        let full = cost_with(LcsProblem::new(&s, &t), LengthStrategy::FullTable);
        prop_assert_eq!(rolling, full);
        let (table, _) = DpEngine::new(LcsProblem::new(&s, &t)).table();
        prop_assert_eq!(full, table.corner() as usize);
    }

    #[test]
    fn lccs_rolling_equals_full_table(s in tokens(16), t in tokens(16)) {
        let problem = LccsProblem::new(&s, &t);
        let rolling = cost_with(problem.clone(), LengthStrategy::Rolling);
        let full = cost_with(problem.clone(), LengthStrategy::FullTable);
        prop_assert_eq!(rolling, full);
        prop_assert_eq!(problem.locate(), problem.run_table().1);
    }

    #[test]
    fn final_frontier_is_last_table_row(s in tokens(12), t in tokens(12)) {
        let problem = LcsProblem::new(&s, &t);
        let engine = DpEngine::new(problem.clone());
        let frontier = engine.final_frontier();
        let (table, _) = engine.table();
        prop_assert_eq!(problem.cells(&frontier), table.row(s.len()));
    }
}

#[test]
fn byte_tokens_use_the_same_engine() {
    let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    let engine = DpEngine::with_strategy(LcsProblem::new(s, t), LengthStrategy::FullTable);
    assert_eq!(engine.cost(), 20);
    let (len, lcs) = engine.run();
    assert_eq!(len, 20);
    assert!(seqdp::utils::is_subsequence(&lcs, s));
    assert!(seqdp::utils::is_subsequence(&lcs, t));
}
