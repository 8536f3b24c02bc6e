//! 고유벡터 중심성 (멱반복, A + I)

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
    pub max_iterations: usize,
    /// 노드당 L1 변화 허용치
    pub tolerance: f64,
    /// 간선 가중치 사용 여부
    pub weighted: bool,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self { max_iterations: 100, tolerance: 1e-6, weighted: false }
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality(graph: &UnGraph<usize, f64>, config: EigenvectorConfig) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut x = vec![1.0 / n as f64; n];
    for _ in 0..config.max_iterations {
        let last = x.clone();
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            let w = if config.weighted { *edge.weight() } else { 1.0 };
            x[b] += last[a] * w;
            x[a] += last[b] * w;
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm > 0.0 { norm } else { 1.0 };
        x.iter_mut().for_each(|v| *v /= norm);

        let change: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if change < n as f64 * config.tolerance {
            return x;
        }
    }

    log::warn!(
        "eigenvector centrality did not converge in {} iterations",
        config.max_iterations
    );
    x
}
