//! 무작위 시드 전략
//!
//! 인덱스 0 을 제외한 `[1, N)` 범위에서 서로 다른 노드를 균등 추출한다.

use super::{check_cluster_count, CentroidStrategy};
use crate::core::graph::Graph;
use crate::error::Result;
use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

pub struct RandomSeeds {
    rng: StdRng,
}

impl RandomSeeds {
    /// 시드가 없으면 엔트로피에서 초기화 (비결정적)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl CentroidStrategy for RandomSeeds {
    fn name(&self) -> &'static str {
        "RandomSeeds"
    }

    /// 노드 0 은 후보에서 빠진다
    fn eligible_nodes(&self, graph: &Graph) -> usize {
        graph.num_nodes().saturating_sub(1)
    }

    fn select_nodes(
        &mut self,
        _graph: &Graph,
        embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        let n = embeddings.nrows();
        check_cluster_count(n_clusters, n.saturating_sub(1))?;
        log::info!("Using Random Seeds to find the centroids...");
        Ok(sample(&mut self.rng, n - 1, n_clusters)
            .into_iter()
            .map(|i| i + 1)
            .collect())
    }
}
