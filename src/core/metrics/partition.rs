//! 두 분할 사이의 외부 일치도 (NMI, ARI)

use crate::error::{GaeError, Result};
use ndarray::Array2;
use std::collections::BTreeMap;

fn relabel(values: &[usize]) -> (Vec<usize>, usize) {
    let mut ids = BTreeMap::new();
    let mapped = values
        .iter()
        .map(|v| {
            let next = ids.len();
            *ids.entry(*v).or_insert(next)
        })
        .collect();
    (mapped, ids.len())
}

/// 행 = 정답 클래스, 열 = 예측 클러스터 인 분할표
pub fn contingency_table(labels: &[usize], predicted: &[usize]) -> Result<Array2<f64>> {
    if labels.len() != predicted.len() {
        return Err(GaeError::InvalidConfig(format!(
            "label count {} does not match prediction count {}",
            labels.len(),
            predicted.len()
        )));
    }
    let (labels, n_classes) = relabel(labels);
    let (predicted, n_clusters) = relabel(predicted);
    let mut table = Array2::zeros((n_classes, n_clusters));
    for (&l, &p) in labels.iter().zip(&predicted) {
        table[[l, p]] += 1.0;
    }
    Ok(table)
}

fn entropy(counts: impl Iterator<Item = f64>, n: f64) -> f64 {
    counts
        .filter(|&c| c > 0.0)
        .map(|c| {
            let p = c / n;
            -p * p.ln()
        })
        .sum()
}

/// 정규화 상호정보량, 산술 평균 정규화: MI / ((H(U) + H(V)) / 2)
///
/// 두 분할이 모두 단일 군집이면 1 을 돌려준다.
pub fn normalized_mutual_info(labels: &[usize], predicted: &[usize]) -> Result<f64> {
    let table = contingency_table(labels, predicted)?;
    let (rows, cols) = table.dim();
    if (rows == 1 && cols == 1) || rows == 0 {
        return Ok(1.0);
    }
    let n = table.sum();
    let row_sums = table.sum_axis(ndarray::Axis(1));
    let col_sums = table.sum_axis(ndarray::Axis(0));

    let mut mi = 0.0;
    for ((i, j), &nij) in table.indexed_iter() {
        if nij > 0.0 {
            mi += nij / n * (n * nij / (row_sums[i] * col_sums[j])).ln();
        }
    }
    if mi <= 0.0 {
        return Ok(0.0);
    }
    let h_true = entropy(row_sums.iter().copied(), n);
    let h_pred = entropy(col_sums.iter().copied(), n);
    Ok((mi / ((h_true + h_pred) / 2.0)).min(1.0))
}

fn comb2(x: f64) -> f64 {
    x * (x - 1.0) / 2.0
}

/// 조정 랜드 지수
///
/// 무작위 분할의 기댓값은 0, 완전 일치는 1 이다.
pub fn adjusted_rand_index(labels: &[usize], predicted: &[usize]) -> Result<f64> {
    let table = contingency_table(labels, predicted)?;
    let (rows, cols) = table.dim();
    let n = table.sum();
    // 단일 군집끼리 또는 모든 점이 각자 군집인 경우
    if rows == cols && (rows <= 1 || rows as f64 == n) {
        return Ok(1.0);
    }

    let sum_comb: f64 = table.iter().map(|&c| comb2(c)).sum();
    let sum_rows: f64 = table.sum_axis(ndarray::Axis(1)).iter().map(|&c| comb2(c)).sum();
    let sum_cols: f64 = table.sum_axis(ndarray::Axis(0)).iter().map(|&c| comb2(c)).sum();

    let expected = sum_rows * sum_cols / comb2(n);
    let max_index = (sum_rows + sum_cols) / 2.0;
    if max_index == expected {
        return Ok(0.0);
    }
    Ok((sum_comb - expected) / (max_index - expected))
}
