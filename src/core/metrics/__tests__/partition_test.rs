use crate::core::metrics::{adjusted_rand_index, contingency_table, normalized_mutual_info};
use approx::assert_abs_diff_eq;

#[test]
fn 레이블_이름과_무관하게_완전_일치() {
    let labels = [0, 0, 1, 1, 2, 2];
    let predicted = [5, 5, 3, 3, 9, 9];
    assert_abs_diff_eq!(normalized_mutual_info(&labels, &predicted).unwrap(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(adjusted_rand_index(&labels, &predicted).unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn independent_partitions_score_zero() {
    let labels = [0, 0, 1, 1];
    let predicted = [0, 1, 0, 1];
    assert_abs_diff_eq!(normalized_mutual_info(&labels, &predicted).unwrap(), 0.0, epsilon = 1e-9);
    // sum_comb = 0, expected = 2·2/6, max = 2 → (0 - 2/3) / (2 - 2/3) = -0.5
    assert_abs_diff_eq!(adjusted_rand_index(&labels, &predicted).unwrap(), -0.5, epsilon = 1e-9);
}

#[test]
fn known_partial_agreement() {
    // sklearn 기준값: adjusted_rand_score([0,0,1,1],[0,0,1,2]) = 0.5714...
    let ari = adjusted_rand_index(&[0, 0, 1, 1], &[0, 0, 1, 2]).unwrap();
    assert_abs_diff_eq!(ari, 4.0 / 7.0, epsilon = 1e-9);
    // normalized_mutual_info_score(...) = 0.8
    let nmi = normalized_mutual_info(&[0, 0, 1, 1], &[0, 0, 1, 2]).unwrap();
    assert_abs_diff_eq!(nmi, 0.8, epsilon = 1e-9);
}

#[test]
fn contingency_counts_pairs() {
    let table = contingency_table(&[0, 0, 1], &[1, 0, 0]).unwrap();
    assert_eq!(table.dim(), (2, 2));
    assert_eq!(table[[0, 0]], 1.0); // 클래스 0, 클러스터 1 (처음 등장)
    assert_eq!(table[[0, 1]], 1.0);
    assert_eq!(table[[1, 1]], 1.0);
    assert!(contingency_table(&[0], &[0, 1]).is_err());
}

#[test]
fn trivial_partitions() {
    assert_eq!(normalized_mutual_info(&[1, 1, 1], &[0, 0, 0]).unwrap(), 1.0);
    assert_eq!(adjusted_rand_index(&[1, 1, 1], &[0, 0, 0]).unwrap(), 1.0);
    assert_eq!(normalized_mutual_info(&[0, 1, 2], &[0, 0, 0]).unwrap(), 0.0);
}
