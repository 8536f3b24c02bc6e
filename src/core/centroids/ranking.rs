//! 구조 점수 상위 k 노드를 고르는 전략들

use super::algo::{
    betweenness_centrality, closeness_centrality, core_numbers, eigenvector_centrality, pagerank,
    BetweennessConfig, EigenvectorConfig, PageRankConfig,
};
use super::{check_cluster_count, top_k, CentroidStrategy};
use crate::core::graph::Graph;
use crate::error::Result;
use ndarray::ArrayView2;

/// 비가중 매개 중심성
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweennessCentrality;

impl CentroidStrategy for BetweennessCentrality {
    fn name(&self) -> &'static str {
        "BetweennessCentrality"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        let scores = betweenness_centrality(&graph.to_petgraph(), BetweennessConfig::default());
        Ok(top_k(&scores, n_clusters))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClosenessCentrality;

impl CentroidStrategy for ClosenessCentrality {
    fn name(&self) -> &'static str {
        "ClosenessCentrality"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        Ok(top_k(&closeness_centrality(&graph.to_petgraph()), n_clusters))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EigenvectorCentrality {
    pub config: EigenvectorConfig,
}

impl CentroidStrategy for EigenvectorCentrality {
    fn name(&self) -> &'static str {
        "EigenvectorCentrality"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        let scores = eigenvector_centrality(&graph.to_petgraph(), self.config);
        Ok(top_k(&scores, n_clusters))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageRank {
    pub config: PageRankConfig,
}

impl CentroidStrategy for PageRank {
    fn name(&self) -> &'static str {
        "PageRank"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        Ok(top_k(&pagerank(&graph.to_petgraph(), self.config), n_clusters))
    }
}

/// core number 가 가장 큰 노드 (동점은 차수, 다음은 인덱스 순)
#[derive(Debug, Clone, Copy, Default)]
pub struct KCore;

impl CentroidStrategy for KCore {
    fn name(&self) -> &'static str {
        "KCore"
    }

    #[allow(clippy::cast_precision_loss)]
    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        let cores = core_numbers(&graph.to_petgraph());
        let degrees = graph.degrees();
        // core 가 우선, 차수는 core 한 단계보다 작게 반영
        let scale = (degrees.iter().max().copied().unwrap_or(0) + 1) as f64;
        let scores: Vec<f64> = cores
            .iter()
            .zip(&degrees)
            .map(|(&c, &d)| c as f64 + d as f64 / scale)
            .collect();
        Ok(top_k(&scores, n_clusters))
    }
}
