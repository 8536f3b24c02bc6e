//! 노드 속성 + 간선 집합으로 이루어진 학습 입력 그래프

use crate::error::{GaeError, Result};
use ndarray::{Array2, ArrayView2};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 학습 실행 동안 불변인 입력 그래프
///
/// 노드 i 의 속성 벡터는 `features` 의 i 번째 행이다.
/// 간선은 방향 쌍으로 저장되지만 구조 연산은 모두 무방향으로 해석한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    features: Array2<f32>,
    edges: Vec<(usize, usize)>,
    labels: Option<Vec<usize>>,
}

impl Graph {
    /// 새 그래프 생성 (간선 인덱스 범위 검증)
    pub fn new(features: Array2<f32>, edges: Vec<(usize, usize)>) -> Result<Self> {
        let n = features.nrows();
        if n == 0 {
            return Err(GaeError::InvalidGraph("graph has no nodes".into()));
        }
        if let Some(&(u, v)) = edges.iter().find(|&&(u, v)| u >= n || v >= n) {
            return Err(GaeError::InvalidGraph(format!(
                "edge ({u}, {v}) out of range for {n} nodes"
            )));
        }
        Ok(Self { features, edges, labels: None })
    }

    /// 정답 레이블 부착 (리포팅 지표용)
    pub fn with_labels(mut self, labels: Vec<usize>) -> Result<Self> {
        if labels.len() != self.num_nodes() {
            return Err(GaeError::InvalidGraph(format!(
                "{} labels for {} nodes",
                labels.len(),
                self.num_nodes()
            )));
        }
        self.labels = Some(labels);
        Ok(self)
    }

    pub fn num_nodes(&self) -> usize {
        self.features.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// 원본 간선 (재구성 손실의 양성 샘플)
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// 서로 다른 레이블 개수
    pub fn num_classes(&self) -> Option<usize> {
        self.labels
            .as_ref()
            .map(|labels| labels.iter().collect::<HashSet<_>>().len())
    }

    /// 중복/자기 루프를 제거한 무방향 간선 (처음 등장한 순서 유지)
    pub fn undirected_edges(&self) -> Vec<(usize, usize)> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        let mut out = Vec::with_capacity(self.edges.len());
        for &(u, v) in &self.edges {
            if u == v {
                continue;
            }
            let key = (u.min(v), u.max(v));
            if seen.insert(key) {
                out.push(key);
            }
        }
        out
    }

    /// 무방향 인접 리스트 (오름차순 정렬)
    pub fn neighbors(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.num_nodes()];
        for (u, v) in self.undirected_edges() {
            adj[u].push(v);
            adj[v].push(u);
        }
        for list in &mut adj {
            list.sort_unstable();
        }
        adj
    }

    pub fn degrees(&self) -> Vec<usize> {
        self.neighbors().iter().map(Vec::len).collect()
    }

    /// 구조 그래프를 petgraph 무방향 그래프로 변환
    ///
    /// 노드 가중치는 원래 노드 인덱스, 간선 가중치는 1.0 으로 시작한다.
    /// `NodeIndex::index()` 는 원래 인덱스와 항상 같다.
    pub fn to_petgraph(&self) -> UnGraph<usize, f64> {
        let edges = self.undirected_edges();
        let mut g = UnGraph::with_capacity(self.num_nodes(), edges.len());
        for i in 0..self.num_nodes() {
            g.add_node(i);
        }
        for (u, v) in edges {
            g.add_edge(NodeIndex::new(u), NodeIndex::new(v), 1.0);
        }
        g
    }
}
