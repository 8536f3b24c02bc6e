//! # Centroid 선택 전략
//!
//! 전략 이름 → 알고리즘 레지스트리. 모든 전략은 그래프와 현재 임베딩,
//! 클러스터 수를 받아 선택된 노드들의 임베딩을 초기 centroid 로 반환한다.

pub mod algo;
pub mod registry;
pub mod random_seeds;
pub mod weighted_betweenness;
pub mod ranking;
pub mod kmeans;
pub mod community;

pub use registry::{CentroidRegistry, StrategyFactory};
pub use random_seeds::RandomSeeds;
pub use weighted_betweenness::WeightedBetweennessCentrality;
pub use ranking::{
    BetweennessCentrality, ClosenessCentrality, EigenvectorCentrality, KCore, PageRank,
};
pub use kmeans::KMeansSeeds;
pub use community::{FastGreedy, WeightedModularity};

use crate::core::graph::Graph;
use crate::error::{GaeError, Result};
use ndarray::{Array2, ArrayView2, Axis};

/// centroid 선택 능력
///
/// 구현체는 `select_nodes` 만 제공하면 되고, `select_centroids` 는
/// 선택된 노드들의 임베딩 행을 모아 k×d 행렬로 돌려준다.
pub trait CentroidStrategy {
    /// 레지스트리 등록 이름
    fn name(&self) -> &'static str;

    /// centroid 로 고를 수 있는 노드 수
    fn eligible_nodes(&self, graph: &Graph) -> usize {
        graph.num_nodes()
    }

    /// `n_clusters` 개의 서로 다른 노드 인덱스 선택
    fn select_nodes(
        &mut self,
        graph: &Graph,
        embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>>;

    fn select_centroids(
        &mut self,
        graph: &Graph,
        embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Array2<f32>> {
        if embeddings.nrows() != graph.num_nodes() {
            return Err(GaeError::InvalidConfig(format!(
                "{} embedding rows for {} nodes",
                embeddings.nrows(),
                graph.num_nodes()
            )));
        }
        let nodes = self.select_nodes(graph, embeddings, n_clusters)?;
        log::debug!("{} selected centroid nodes {:?}", self.name(), nodes);
        Ok(embeddings.select(Axis(0), &nodes))
    }
}

/// 요청한 클러스터 수가 선택 가능한 노드 수 이내인지 확인
pub(crate) fn check_cluster_count(n_clusters: usize, eligible: usize) -> Result<()> {
    if n_clusters == 0 {
        return Err(GaeError::InvalidConfig("n_clusters must be positive".into()));
    }
    if n_clusters > eligible {
        return Err(GaeError::InvalidConfig(format!(
            "cannot pick {n_clusters} centroids from {eligible} eligible nodes"
        )));
    }
    Ok(())
}

/// 점수 내림차순 상위 k 개 노드 (동점은 노드 인덱스 순)
pub(crate) fn top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(k);
    order
}

#[cfg(test)]
mod __tests__;
