//! t-차 이웃 구조 인덱스
//!
//! 각 노드에서 t 홉 이내로 도달 가능한 모든 노드를 이웃으로 연결한다.
//! 인코더는 원본 간선 대신 이 확장 구조 위에서 어텐션을 계산한다.

use super::Graph;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralIndex {
    /// (source, target) 쌍
    pub edges: Vec<(usize, usize)>,
    /// 간선별 가중치 = 1 / 홉 거리
    ///
    /// `EmbeddingNetwork::encode` 에 넘기는 선택적 edge_weights 입력으로 보관한다.
    /// 기본 GAT 인코더는 어텐션 계산에 사용하지 않는다.
    pub weights: Vec<f32>,
    pub order: usize,
}

impl StructuralIndex {
    /// t 홉 이내 이웃 확장
    pub fn t_order(graph: &Graph, t: usize) -> Self {
        let adj = graph.neighbors();
        let n = graph.num_nodes();
        let mut edges = Vec::new();
        let mut weights = Vec::new();
        let mut hops = vec![usize::MAX; n];
        let mut touched = Vec::new();

        for source in 0..n {
            hops[source] = 0;
            touched.push(source);
            let mut queue = VecDeque::from([source]);

            while let Some(v) = queue.pop_front() {
                let h = hops[v];
                if h == t {
                    continue;
                }
                for &w in &adj[v] {
                    if hops[w] == usize::MAX {
                        hops[w] = h + 1;
                        touched.push(w);
                        queue.push_back(w);
                        edges.push((source, w));
                        weights.push(1.0 / (h + 1) as f32);
                    }
                }
            }

            for &v in &touched {
                hops[v] = usize::MAX;
            }
            touched.clear();
        }

        Self { edges, weights, order: t }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
