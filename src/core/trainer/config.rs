//! 학습 하이퍼파라미터

use crate::core::optimizers::{LearningRateSchedule, OptimizerConfig};
use crate::error::{GaeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 한 번의 학습 실행 구성
///
/// JSON 에서 일부 필드만 지정하면 나머지는 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: usize,
    /// centroid 전략 이름 (대소문자 무시)
    pub find_centroids_alg: String,
    /// 없으면 그래프 레이블의 클래스 수
    pub n_clusters: Option<usize>,
    /// 클러스터링 손실 배수
    pub c_loss_gamma: f64,
    /// 목표 분포 P 재계산 주기 (에폭)
    pub p_interval: usize,
    pub optimizer: OptimizerConfig,
    /// centroid 경사 하강 스텝
    pub update_clusters_step_size: f64,
    /// 손실이 줄지 않은 연속 에폭 수가 이 값에 도달하면 재선택
    pub not_improving_limit: usize,
    pub rechoose_centroids: bool,
    pub hidden_layer: usize,
    pub output_layer: usize,
    pub heads: usize,
    /// 구조 인덱스 홉 반경
    pub t_order: usize,
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            find_centroids_alg: "KMeans".to_string(),
            n_clusters: None,
            c_loss_gamma: 20.0,
            p_interval: 10,
            optimizer: OptimizerConfig::default(),
            update_clusters_step_size: 1e-3,
            not_improving_limit: 100,
            rechoose_centroids: true,
            hidden_layer: 256,
            output_layer: 16,
            heads: 1,
            t_order: 2,
            seed: None,
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 로드
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_strategy(mut self, name: impl Into<String>) -> Self {
        self.find_centroids_alg = name.into();
        self
    }

    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = Some(n_clusters);
        self
    }

    pub fn with_c_loss_gamma(mut self, gamma: f64) -> Self {
        self.c_loss_gamma = gamma;
        self
    }

    pub fn with_p_interval(mut self, interval: usize) -> Self {
        self.p_interval = interval;
        self
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.optimizer.learning_rate = lr;
        self
    }

    /// 학습률 스케줄 설정
    pub fn with_lr_schedule(mut self, schedule: LearningRateSchedule) -> Self {
        self.optimizer.lr_schedule = schedule;
        self
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.update_clusters_step_size = step_size;
        self
    }

    pub fn with_not_improving_limit(mut self, limit: usize) -> Self {
        self.not_improving_limit = limit;
        self
    }

    pub fn with_rechoose_centroids(mut self, enabled: bool) -> Self {
        self.rechoose_centroids = enabled;
        self
    }

    pub fn with_layers(mut self, hidden: usize, output: usize) -> Self {
        self.hidden_layer = hidden;
        self.output_layer = output;
        self
    }

    pub fn with_heads(mut self, heads: usize) -> Self {
        self.heads = heads;
        self
    }

    pub fn with_t_order(mut self, t: usize) -> Self {
        self.t_order = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(GaeError::InvalidConfig(msg));
        if self.epochs == 0 {
            return fail("epochs must be positive".into());
        }
        if self.p_interval == 0 {
            return fail("p_interval must be positive".into());
        }
        if self.c_loss_gamma.is_nan() || self.c_loss_gamma < 0.0 {
            return fail(format!("c_loss_gamma must be non-negative, got {}", self.c_loss_gamma));
        }
        if self.not_improving_limit == 0 {
            return fail("not_improving_limit must be positive".into());
        }
        if self.update_clusters_step_size.is_nan() || self.update_clusters_step_size <= 0.0 {
            return fail(format!(
                "update_clusters_step_size must be positive, got {}",
                self.update_clusters_step_size
            ));
        }
        if self.hidden_layer == 0 || self.output_layer == 0 || self.heads == 0 {
            return fail("layer sizes and head count must be positive".into());
        }
        if self.t_order == 0 {
            return fail("t_order must be at least 1".into());
        }
        if self.n_clusters == Some(0) {
            return fail("n_clusters must be positive".into());
        }
        self.optimizer.validate()
    }
}
