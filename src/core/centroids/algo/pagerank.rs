//! 무방향 그래프 PageRank (각 간선을 양방향 링크로 취급)

use petgraph::graph::UnGraph;

#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// 링크를 따라갈 확률 (보통 0.85)
    pub damping_factor: f64,
    pub max_iterations: usize,
    /// 노드당 L1 변화 허용치
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping_factor: 0.85, max_iterations: 100, tolerance: 1e-6 }
    }
}

/// 점수 합은 1
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(graph: &UnGraph<usize, f64>, config: PageRankConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let nf = n as f64;
    let d = config.damping_factor;
    let degree: Vec<usize> = graph.node_indices().map(|v| graph.neighbors(v).count()).collect();

    let mut x = vec![1.0 / nf; n];
    for _ in 0..config.max_iterations {
        let dangling: f64 = (0..n).filter(|&v| degree[v] == 0).map(|v| x[v]).sum();
        let base = (1.0 - d) / nf + d * dangling / nf;
        let mut next = vec![base; n];
        for v in graph.node_indices() {
            let vi = v.index();
            if degree[vi] == 0 {
                continue;
            }
            let share = d * x[vi] / degree[vi] as f64;
            for w in graph.neighbors(v) {
                next[w.index()] += share;
            }
        }

        let change: f64 = next.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
        x = next;
        if change < nf * config.tolerance {
            break;
        }
    }
    x
}
