//! k-means 기반 전략
//!
//! 임베딩 공간에서 k-means++ 초기화 + Lloyd 반복을 수행한 뒤,
//! 각 최종 평균에 가장 가까운 (아직 선택되지 않은) 노드를 대표로 고른다.

use super::{check_cluster_count, CentroidStrategy};
use crate::core::graph::Graph;
use crate::error::Result;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct KMeansSeeds {
    rng: StdRng,
    pub max_iterations: usize,
    /// 평균 이동량 합이 이 값 미만이면 수렴
    pub tolerance: f32,
}

impl KMeansSeeds {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng, max_iterations: 100, tolerance: 1e-4 }
    }

    /// Lloyd 반복으로 k 개 평균 계산
    pub fn fit(&mut self, data: ArrayView2<'_, f32>, k: usize) -> Array2<f32> {
        let mut means = self.init_plus_plus(data, k);
        let mut labels = vec![0usize; data.nrows()];

        for _ in 0..self.max_iterations {
            for (i, point) in data.outer_iter().enumerate() {
                labels[i] = nearest(point, means.view());
            }

            let mut sums = Array2::<f32>::zeros(means.raw_dim());
            let mut counts = vec![0usize; k];
            for (i, point) in data.outer_iter().enumerate() {
                let mut row = sums.row_mut(labels[i]);
                row += &point;
                counts[labels[i]] += 1;
            }

            let mut shift = 0.0;
            for c in 0..k {
                // 빈 클러스터는 이전 평균 유지
                if counts[c] == 0 {
                    continue;
                }
                let new_mean = sums.row(c).mapv(|v| v / counts[c] as f32);
                shift += squared_distance(new_mean.view(), means.row(c)).sqrt();
                means.row_mut(c).assign(&new_mean);
            }
            if shift < self.tolerance {
                break;
            }
        }
        means
    }

    fn init_plus_plus(&mut self, data: ArrayView2<'_, f32>, k: usize) -> Array2<f32> {
        let n = data.nrows();
        let mut chosen = vec![self.rng.gen_range(0..n)];
        let mut d2: Array1<f32> = data
            .outer_iter()
            .map(|p| squared_distance(p, data.row(chosen[0])))
            .collect();

        while chosen.len() < k {
            let next = match WeightedIndex::new(d2.iter().map(|&d| f64::from(d))) {
                Ok(dist) => dist.sample(&mut self.rng),
                // 모든 점이 이미 평균과 겹침: 미선택 노드 중 첫 번째
                Err(_) => (0..n).find(|i| !chosen.contains(i)).unwrap_or(0),
            };
            chosen.push(next);
            for (i, p) in data.outer_iter().enumerate() {
                d2[i] = d2[i].min(squared_distance(p, data.row(next)));
            }
        }
        data.select(Axis(0), &chosen)
    }
}

impl CentroidStrategy for KMeansSeeds {
    fn name(&self) -> &'static str {
        "KMeans"
    }

    fn select_nodes(
        &mut self,
        _graph: &Graph,
        embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        check_cluster_count(n_clusters, embeddings.nrows())?;
        log::info!("Using KMeans to find the centroids...");
        let means = self.fit(embeddings, n_clusters);

        let mut taken = vec![false; embeddings.nrows()];
        let mut nodes = Vec::with_capacity(n_clusters);
        for mean in means.outer_iter() {
            let best = embeddings
                .outer_iter()
                .enumerate()
                .filter(|(i, _)| !taken[*i])
                .map(|(i, p)| (i, squared_distance(p, mean)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i);
            if let Some(i) = best {
                taken[i] = true;
                nodes.push(i);
            }
        }
        Ok(nodes)
    }
}

fn squared_distance(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(point: ArrayView1<'_, f32>, means: ArrayView2<'_, f32>) -> usize {
    means
        .outer_iter()
        .enumerate()
        .map(|(c, m)| (c, squared_distance(point, m)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(0, |(c, _)| c)
}
