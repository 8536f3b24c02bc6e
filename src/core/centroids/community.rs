//! 커뮤니티 탐지 기반 전략
//!
//! 탐욕적 모듈러리티 커뮤니티 중 큰 순서로 k 개를 골라 각 커뮤니티의
//! 최고 차수 노드를 대표로 쓴다. 커뮤니티가 k 개보다 적으면 나머지는
//! 아직 선택되지 않은 최고 차수 노드로 채운다.

use super::algo::greedy_modularity_communities;
use super::{check_cluster_count, CentroidStrategy};
use crate::core::graph::{apply_weights, graph_attr_distances, Graph, Mechanism, WeightTransform};
use crate::error::Result;
use ndarray::ArrayView2;
use petgraph::graph::UnGraph;

/// 비가중 Clauset–Newman–Moore
#[derive(Debug, Clone, Copy, Default)]
pub struct FastGreedy;

impl CentroidStrategy for FastGreedy {
    fn name(&self) -> &'static str {
        "FastGreedy"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        log::info!("Using Fast Greedy to find the centroids...");
        Ok(representatives(graph, &graph.to_petgraph(), n_clusters))
    }
}

/// 속성 유사도를 간선 강도로 쓰는 모듈러리티 최적화
#[derive(Debug, Clone, Copy)]
pub struct WeightedModularity {
    pub mechanism: Mechanism,
    pub transform: WeightTransform,
}

impl Default for WeightedModularity {
    fn default() -> Self {
        Self { mechanism: Mechanism::Cosine, transform: WeightTransform::Identity }
    }
}

impl CentroidStrategy for WeightedModularity {
    fn name(&self) -> &'static str {
        "WeightedModularity"
    }

    fn select_nodes(
        &mut self,
        graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, graph.num_nodes())?;
        log::info!("Using Weighted Modularity to find the centroids...");
        let mut structure = graph.to_petgraph();
        let distances = graph_attr_distances(graph.features(), self.mechanism);
        apply_weights(&mut structure, &distances, self.transform);
        Ok(representatives(graph, &structure, n_clusters))
    }
}

fn representatives(graph: &Graph, structure: &UnGraph<usize, f64>, k: usize) -> Vec<usize> {
    let degrees = graph.degrees();
    let communities = greedy_modularity_communities(structure, k);
    log::debug!("found {} communities", communities.len());

    let by_degree = |a: &usize, b: &usize| degrees[*b].cmp(&degrees[*a]).then(a.cmp(b));

    let mut taken = vec![false; graph.num_nodes()];
    let mut nodes = Vec::with_capacity(k);
    for community in communities.iter().take(k) {
        if let Some(best) = community.iter().copied().min_by(|a, b| by_degree(a, b)) {
            taken[best] = true;
            nodes.push(best);
        }
    }

    if nodes.len() < k {
        let mut rest: Vec<usize> = (0..graph.num_nodes()).filter(|&v| !taken[v]).collect();
        rest.sort_by(by_degree);
        nodes.extend(rest.into_iter().take(k - nodes.len()));
    }
    nodes
}
