//! Brandes 매개 중심성 (가중/비가중)
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! 가중 모드에서는 간선 가중치를 최단 경로의 거리로 사용하고
//! BFS 대신 Dijkstra 로 σ 와 선행자 집합을 구한다.
//! 무방향 그래프에서 정규화 시 `(n-1)(n-2)` 로 나눈다.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

#[derive(Debug, Clone, Copy)]
pub struct BetweennessConfig {
    /// 간선 가중치를 거리로 사용
    pub weighted: bool,
    /// [0, 1] 범위로 정규화
    pub normalized: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self { weighted: false, normalized: true }
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(graph: &UnGraph<usize, f64>, config: BetweennessConfig) -> Vec<f64> {
    let n = graph.node_count();
    let mut betweenness = vec![0.0_f64; n];
    if n < 3 {
        return betweenness;
    }

    for s in graph.node_indices() {
        let (sigma, predecessors, order) = if config.weighted {
            dijkstra_shortest_paths(graph, s)
        } else {
            bfs_shortest_paths(graph, s)
        };

        // 역순 누적: δ_s(v) += (σ_sv / σ_sw) × (1 + δ_s(w))
        let mut delta = vec![0.0_f64; n];
        for &w in order.iter().rev() {
            let coeff = (1.0 + delta[w]) / sigma[w];
            for &v in &predecessors[w] {
                delta[v] += sigma[v] * coeff;
            }
            if w != s.index() {
                betweenness[w] += delta[w];
            }
        }
    }

    // 양방향 경로를 모두 셌으므로 정규화 없이는 절반
    let scale = if config.normalized {
        1.0 / ((n - 1) * (n - 2)) as f64
    } else {
        0.5
    };
    for b in &mut betweenness {
        *b *= scale;
    }
    betweenness
}

type ShortestPaths = (Vec<f64>, Vec<Vec<usize>>, Vec<usize>);

fn bfs_shortest_paths(graph: &UnGraph<usize, f64>, source: NodeIndex) -> ShortestPaths {
    let n = graph.node_count();
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i64; n];
    let mut predecessors = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source.index()] = 1.0;
    dist[source.index()] = 0;
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        let v_idx = v.index();
        order.push(v_idx);
        for w in graph.neighbors(v) {
            let w_idx = w.index();
            if dist[w_idx] < 0 {
                dist[w_idx] = dist[v_idx] + 1;
                queue.push_back(w);
            }
            if dist[w_idx] == dist[v_idx] + 1 {
                sigma[w_idx] += sigma[v_idx];
                predecessors[w_idx].push(v_idx);
            }
        }
    }

    (sigma, predecessors, order)
}

/// 최소 힙 항목 (거리, 삽입 순서)
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    dist: f64,
    seq: usize,
    node: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra_shortest_paths(graph: &UnGraph<usize, f64>, source: NodeIndex) -> ShortestPaths {
    let n = graph.node_count();
    let mut sigma = vec![0.0_f64; n];
    let mut seen: Vec<Option<f64>> = vec![None; n];
    let mut done = vec![false; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);
    let mut seq = 0;

    let s = source.index();
    sigma[s] = 1.0;
    seen[s] = Some(0.0);
    let mut heap = BinaryHeap::from([Frontier { dist: 0.0, seq, node: s }]);

    while let Some(Frontier { dist, node: v, .. }) = heap.pop() {
        if done[v] {
            continue;
        }
        done[v] = true;
        order.push(v);

        for edge in graph.edges(NodeIndex::new(v)) {
            let w = if edge.source().index() == v {
                edge.target().index()
            } else {
                edge.source().index()
            };
            let candidate = dist + *edge.weight();
            match seen[w] {
                Some(known) if done[w] || candidate > known => {}
                Some(known) if candidate == known => {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
                _ => {
                    seen[w] = Some(candidate);
                    seq += 1;
                    heap.push(Frontier { dist: candidate, seq, node: w });
                    sigma[w] = sigma[v];
                    predecessors[w] = vec![v];
                }
            }
        }
    }

    (sigma, predecessors, order)
}
