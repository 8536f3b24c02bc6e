//! 합성 그래프 생성기 (데모 / 테스트용)

use super::Graph;
use crate::error::{GaeError, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 서로 연결되지 않은 k 개의 완전 그래프
///
/// 클리크 c 의 노드 속성은 c 번째 성분만 1 인 one-hot 벡터이고
/// 레이블은 클리크 번호다.
pub fn disjoint_cliques(n_cliques: usize, clique_size: usize) -> Result<Graph> {
    if n_cliques == 0 || clique_size == 0 {
        return Err(GaeError::InvalidGraph("cliques must be non-empty".into()));
    }
    let n = n_cliques * clique_size;
    let mut features = Array2::zeros((n, n_cliques));
    let mut edges = Vec::new();
    let mut labels = Vec::with_capacity(n);

    for c in 0..n_cliques {
        let base = c * clique_size;
        for i in 0..clique_size {
            features[[base + i, c]] = 1.0;
            labels.push(c);
            for j in 0..clique_size {
                if i != j {
                    edges.push((base + i, base + j));
                }
            }
        }
    }

    Graph::new(features, edges)?.with_labels(labels)
}

/// planted partition 모델 설정
#[derive(Debug, Clone)]
pub struct PlantedPartitionConfig {
    pub n_blocks: usize,
    pub block_size: usize,
    /// 블록 내부 간선 확률
    pub p_in: f64,
    /// 블록 간 간선 확률
    pub p_out: f64,
    /// 속성 차원 (n_blocks 이상)
    pub feature_dim: usize,
    /// one-hot 블록 속성에 더할 균등 잡음의 크기
    pub feature_noise: f32,
    pub seed: u64,
}

impl Default for PlantedPartitionConfig {
    fn default() -> Self {
        Self {
            n_blocks: 3,
            block_size: 30,
            p_in: 0.3,
            p_out: 0.01,
            feature_dim: 16,
            feature_noise: 0.1,
            seed: 42,
        }
    }
}

pub fn planted_partition(config: &PlantedPartitionConfig) -> Result<Graph> {
    if config.n_blocks == 0 || config.block_size == 0 {
        return Err(GaeError::InvalidGraph("blocks must be non-empty".into()));
    }
    if config.feature_dim < config.n_blocks {
        return Err(GaeError::InvalidGraph(format!(
            "feature_dim {} smaller than n_blocks {}",
            config.feature_dim, config.n_blocks
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.n_blocks * config.block_size;
    let labels: Vec<usize> = (0..n).map(|i| i / config.block_size).collect();

    let mut features = Array2::zeros((n, config.feature_dim));
    for (i, &block) in labels.iter().enumerate() {
        for f in 0..config.feature_dim {
            features[[i, f]] = rng.gen::<f32>() * config.feature_noise;
        }
        features[[i, block]] += 1.0;
    }

    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            let p = if labels[u] == labels[v] { config.p_in } else { config.p_out };
            if rng.gen_bool(p.clamp(0.0, 1.0)) {
                edges.push((u, v));
                edges.push((v, u));
            }
        }
    }

    Graph::new(features, edges)?.with_labels(labels)
}
