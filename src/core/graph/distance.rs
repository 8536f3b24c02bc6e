//! 노드 속성 유사도 기반 간선 가중치 계산
//!
//! 코사인 유사도는 1 = 동일, 0 = 전혀 다름 으로 해석한다.
//! 가중치는 최단 경로 계산에서 "거리" 로 쓰이므로 유사한 양 끝점일수록
//! 작은 값이 되도록 변환한다.

use ndarray::{Array2, ArrayView2, Axis};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

/// Inverse 변환에서 0 나눗셈을 막는 유사도 하한 (가중치 상한 1000)
pub const MIN_SIMILARITY: f64 = 1e-3;

/// 속성 간 유사도 계산 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    Cosine,
}

/// 유사도 → 간선 가중치 변환
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightTransform {
    /// w = 1 / max(s, MIN_SIMILARITY)
    Inverse,
    /// w = s
    Identity,
}

impl WeightTransform {
    pub fn apply(self, similarity: f32) -> f64 {
        let s = similarity.clamp(0.0, 1.0);
        match self {
            Self::Inverse => 1.0 / f64::from(s).max(MIN_SIMILARITY),
            Self::Identity => f64::from(s),
        }
    }
}

/// 모든 노드 쌍의 속성 유사도 (N×N, [0, 1] 로 클램프)
pub fn graph_attr_distances(features: ArrayView2<'_, f32>, mechanism: Mechanism) -> Array2<f32> {
    match mechanism {
        Mechanism::Cosine => cosine_similarity_matrix(features),
    }
}

fn cosine_similarity_matrix(features: ArrayView2<'_, f32>) -> Array2<f32> {
    let norms = features.map_axis(Axis(1), |row| row.dot(&row).sqrt());
    let mut sims = features.dot(&features.t());
    for ((i, j), s) in sims.indexed_iter_mut() {
        let denom = norms[i] * norms[j];
        *s = if denom > 0.0 { (*s / denom).clamp(0.0, 1.0) } else { 0.0 };
    }
    sims
}

/// 간선별 가중치 (petgraph 간선 인덱스 순서)
pub fn define_weights(
    graph: &UnGraph<usize, f64>,
    distances: &Array2<f32>,
    transform: WeightTransform,
) -> Vec<f64> {
    graph
        .edge_indices()
        .filter_map(|e| graph.edge_endpoints(e))
        .map(|(a, b)| transform.apply(distances[[graph[a], graph[b]]]))
        .collect()
}

/// 계산된 가중치를 간선 속성으로 설정
pub fn apply_weights(
    graph: &mut UnGraph<usize, f64>,
    distances: &Array2<f32>,
    transform: WeightTransform,
) {
    let weights = define_weights(graph, distances, transform);
    for (w, new_w) in graph.edge_weights_mut().zip(weights) {
        *w = new_w;
    }
}
