use seqdp::{lccs, lccs_length, lcs, lcs_length, lcs_table};

#[test]
fn subsequence_of_first() {
    let s1 = [1.0, 2.0, 3.0, 4.0, 5.0];
    let s2 = [2.0, 4.0, 5.0];
    assert_eq!(lcs_length(&s1, &s2), 3);
    assert_eq!(lcs(&s1, &s2), vec![2.0, 4.0, 5.0]);
    assert_eq!(lccs_length(&s1, &s2), 2);
    assert_eq!(lccs(&s1, &s2), vec![4.0, 5.0]);
}

#[test]
fn identical_sequences() {
    let s = [1.0, 2.0, 3.0];
    assert_eq!(lcs_length(&s, &s), 3);
    assert_eq!(lcs(&s, &s), vec![1.0, 2.0, 3.0]);
    assert_eq!(lccs_length(&s, &s), 3);
    assert_eq!(lccs(&s, &s), vec![1.0, 2.0, 3.0]);
}

#[test]
fn disjoint_sequences() {
    let s1 = [1.0, 2.0, 3.0];
    let s2 = [4.0, 5.0, 6.0];
    assert_eq!(lcs_length(&s1, &s2), 0);
    assert_eq!(lcs(&s1, &s2), Vec::<f64>::new());
    assert_eq!(lccs_length(&s1, &s2), 0);
    assert_eq!(lccs(&s1, &s2), Vec::<f64>::new());
}

#[test]
fn alternating_pattern() {
    let s1 = [1.0, 2.0, 1.0, 2.0, 1.0];
    let s2 = [2.0, 1.0, 2.0];
    assert_eq!(lcs_length(&s1, &s2), 3);
    assert_eq!(lcs(&s1, &s2), vec![2.0, 1.0, 2.0]);
    assert_eq!(lccs_length(&s1, &s2), 3);
    assert_eq!(lccs(&s1, &s2), vec![2.0, 1.0, 2.0]);
}

#[test]
fn equal_length_runs_keep_the_first() {
    // [1, 2] ends at s1[1] and [2, 1] ends at s1[2]; the first found wins.
    let s1 = [1.0, 2.0, 1.0];
    let s2 = [2.0, 1.0, 2.0];
    assert_eq!(lccs_length(&s1, &s2), 2);
    assert_eq!(lccs(&s1, &s2), vec![1.0, 2.0]);
}

#[test]
fn empty_first_sequence() {
    let s2 = [1.0, 2.0, 3.0];
    assert_eq!(lcs_length(&[], &s2), 0);
    assert!(lcs(&[], &s2).is_empty());
    assert_eq!(lccs_length(&[], &s2), 0);
    assert!(lccs(&[], &s2).is_empty());
    assert_eq!(lcs_table(&[], &s2).to_nested(), vec![vec![0, 0, 0, 0]]);
}

#[test]
fn both_empty() {
    assert_eq!(lcs_length(&[], &[]), 0);
    assert!(lccs(&[], &[]).is_empty());
    assert_eq!(lcs_table(&[], &[]).to_nested(), vec![vec![0]]);
}

#[test]
fn all_equal_values() {
    let s1 = [7.0; 6];
    let s2 = [7.0; 4];
    assert_eq!(lcs_length(&s1, &s2), 4);
    assert_eq!(lcs(&s1, &s2), vec![7.0; 4]);
    assert_eq!(lccs_length(&s1, &s2), 4);
    assert_eq!(lccs(&s1, &s2), vec![7.0; 4]);
}
