//! 속성 유사도로 가중된 매개 중심성 전략
//!
//! 1. 원본 그래프 연결 구조로 무방향 구조 그래프 생성
//! 2. 노드 속성 코사인 유사도 계산
//! 3. 역변환으로 유사한 양 끝점일수록 짧은 간선 거리 부여
//! 4. 가중 최단 경로 기반 매개 중심성 상위 k 노드 선택

use super::algo::{betweenness_centrality, BetweennessConfig};
use super::{check_cluster_count, top_k, CentroidStrategy};
use crate::core::graph::{apply_weights, graph_attr_distances, Graph, Mechanism, WeightTransform};
use crate::error::Result;
use ndarray::ArrayView2;

#[derive(Debug, Clone, Copy)]
pub struct WeightedBetweennessCentrality {
    pub mechanism: Mechanism,
    pub transform: WeightTransform,
}

impl Default for WeightedBetweennessCentrality {
    fn default() -> Self {
        Self { mechanism: Mechanism::Cosine, transform: WeightTransform::Inverse }
    }
}

impl WeightedBetweennessCentrality {
    /// 노드별 중심성 점수 (노드 인덱스 순)
    pub fn scores(&self, graph: &Graph) -> Vec<f64> {
        let mut structure = graph.to_petgraph();
        let distances = graph_attr_distances(graph.features(), self.mechanism);
        apply_weights(&mut structure, &distances, self.transform);

        let sample: Vec<f64> = structure.edge_weights().take(3).copied().collect();
        log::info!("Edge weights sample: {:?}", sample);

        betweenness_centrality(
            &structure,
            BetweennessConfig { weighted: true, normalized: true },
        )
    }
}

impl CentroidStrategy for WeightedBetweennessCentrality {
    fn name(&self) -> &'static str {
        "WeightedBetweennessCentrality"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        log::info!("Using Weighted Betweenness Centrality to find the centroids...");
        Ok(top_k(&self.scores(graph), n_clusters))
    }
}
