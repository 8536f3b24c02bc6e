//! 공동 학습 에폭 루프
//!
//! 에폭 순서: 순전파 → (필요 시) centroid 선택 → Q → (주기마다) P → Lc
//! → 재구성 손실 → 합산 역전파 → centroid 이동 → 옵티마이저/스케줄러 스텝.

use super::config::TrainingConfig;
use super::report::{LossRecord, MetricsRecord, RunReport};
use super::state::TrainingState;
use crate::core::centroids::{check_cluster_count, CentroidRegistry, CentroidStrategy};
use crate::core::clustering::{
    calculate_p, calculate_q, hard_assignment, kl_div_loss, update_clusters_centers,
};
use crate::core::encoder::{EdgeAttention, EmbeddingNetwork, GatEncoder, GatEncoderConfig};
use crate::core::graph::{Graph, StructuralIndex};
use crate::core::metrics::{adjusted_rand_index, modularity, normalized_mutual_info, BestMetrics};
use crate::core::optimizers::StepScheduler;
use crate::core::tensors::{array_to_tensor, tensor_to_array};
use crate::error::{GaeError, Result};
use candle_core::{Device, Tensor, Var};
use candle_nn::{AdamW, Optimizer};
use chrono::Utc;
use log::{debug, error, info};
use std::time::Instant;

/// 한 에폭의 학습 결과
#[derive(Debug, Clone)]
pub struct EpochStep {
    pub total_loss: f64,
    pub clustering_loss: f64,
    pub reconstruction_loss: f64,
    /// 이동 전 centroid 기준 Q
    pub q: Tensor,
    pub embeddings: Tensor,
    pub attention: EdgeAttention,
}

/// 한 번의 학습 실행을 처음부터 끝까지 진행하는 오케스트레이터
///
/// `run` 이 자신을 소비하므로 인스턴스는 재사용할 수 없다.
pub struct GaeRunner<'g, N: EmbeddingNetwork> {
    config: TrainingConfig,
    graph: &'g Graph,
    structure: StructuralIndex,
    network: N,
    strategy: Box<dyn CentroidStrategy>,
    n_clusters: usize,
    device: Device,
}

impl<'g> GaeRunner<'g, GatEncoder> {
    /// 구성에 맞는 GAT 인코더로 실행기 생성
    pub fn with_gat_encoder(
        config: TrainingConfig,
        graph: &'g Graph,
        registry: &CentroidRegistry,
        device: &Device,
    ) -> Result<Self> {
        let encoder_config =
            GatEncoderConfig::new(graph.num_features(), config.hidden_layer, config.output_layer)
                .with_heads(config.heads);
        let network = GatEncoder::new(&encoder_config, config.seed, device)?;
        Self::new(config, graph, network, registry, device)
    }
}

impl<'g, N: EmbeddingNetwork> GaeRunner<'g, N> {
    /// 구성 검증과 전략 해석은 학습 시작 전에 끝낸다
    pub fn new(
        config: TrainingConfig,
        graph: &'g Graph,
        network: N,
        registry: &CentroidRegistry,
        device: &Device,
    ) -> Result<Self> {
        config.validate()?;
        let strategy = registry
            .resolve(&config.find_centroids_alg, config.seed)
            .inspect_err(|e| error!("{e}. Aborting"))?;
        let n_clusters = config
            .n_clusters
            .or_else(|| graph.num_classes())
            .ok_or_else(|| {
                GaeError::InvalidConfig("n_clusters not set and graph has no labels".into())
            })?;
        check_cluster_count(n_clusters, strategy.eligible_nodes(graph))
            .inspect_err(|e| error!("{} - {e}. Aborting", strategy.name()))?;
        let structure = StructuralIndex::t_order(graph, config.t_order);
        debug!("구조 인덱스: {} 간선 (t = {})", structure.len(), config.t_order);

        Ok(Self {
            config,
            graph,
            structure,
            network,
            strategy,
            n_clusters,
            device: device.clone(),
        })
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    fn print_values(&self) {
        info!("C_LOSS_GAMMA: {}", self.config.c_loss_gamma);
        info!("LEARNING_RATE: {}", self.config.optimizer.learning_rate);
        info!("CALC_P_INTERVAL: {}", self.config.p_interval);
        info!("LR_SCHEDULE: {:?}", self.config.optimizer.lr_schedule);
        info!(
            "CENTROIDS: {} (k = {}, reselect = {}, limit = {})",
            self.strategy.name(),
            self.n_clusters,
            self.config.rechoose_centroids,
            self.config.not_improving_limit
        );
    }

    pub fn run(self) -> Result<RunReport> {
        self.run_with(|_, _| {})
    }

    /// 매 에폭 기록 후 `on_epoch` 호출 (진행 표시 등)
    pub fn run_with<F>(mut self, mut on_epoch: F) -> Result<RunReport>
    where
        F: FnMut(&LossRecord, &MetricsRecord),
    {
        self.print_values();
        let started_at = Utc::now();
        let features = array_to_tensor(self.graph.features(), &self.device)?;

        let mut optimizer = AdamW::new(self.network.trainable_vars(), self.config.optimizer.to_params())?;
        let mut scheduler = StepScheduler::new(
            self.config.optimizer.learning_rate,
            self.config.optimizer.lr_schedule.clone(),
        );

        let mut state = TrainingState::default();
        let mut best = BestMetrics::default();
        let mut losses = Vec::with_capacity(self.config.epochs);
        let mut metrics = Vec::with_capacity(self.config.epochs);
        let mut selections = Vec::new();
        let mut last: Option<(EpochStep, Vec<usize>)> = None;

        for epoch in 0..self.config.epochs {
            let mut choose = false;
            if epoch == 0 || state.plateau.reached(self.config.not_improving_limit) {
                choose = epoch == 0 || self.config.rechoose_centroids;
                state.plateau.reset();
            }
            if choose {
                selections.push(epoch);
            }

            let step = self.train_epoch(epoch, choose, &features, &mut state, &mut optimizer, &mut scheduler)?;
            state.plateau.observe(step.total_loss);

            let loss = LossRecord {
                epoch,
                total_loss: step.total_loss,
                clustering_loss: step.clustering_loss,
                reconstruction_loss: step.reconstruction_loss,
            };
            info!("=> {epoch} - Loss: {}", step.total_loss);
            debug!("GAE Loss: {}", step.reconstruction_loss);
            debug!("Clustering Loss (*10000): {}", 10000.0 * step.clustering_loss);

            let assignment = hard_assignment(&step.q)?;
            let record = self.evaluate(epoch, &assignment)?;
            best.observe(epoch, record.modularity, record.nmi, record.ari);

            on_epoch(&loss, &record);
            losses.push(loss);
            metrics.push(record);
            last = Some((step, assignment));
        }

        info!("=> Best Modularity score: {} at epoch {}", best.modularity.value, best.modularity.epoch);
        if self.graph.labels().is_some() {
            info!("=> Best NMI score: {} at epoch {}", best.nmi.value, best.nmi.epoch);
            info!("=> Best ARI score: {} at epoch {}", best.ari.value, best.ari.epoch);
        }

        // epochs >= 1 은 validate 에서 보장
        let (step, assignment) = last.ok_or_else(|| GaeError::InvalidConfig("no epoch was run".into()))?;
        let centroids = state.centroids.ok_or(GaeError::MissingCentroids)?;

        Ok(RunReport {
            started_at,
            strategy: self.strategy.name().to_string(),
            n_clusters: self.n_clusters,
            losses,
            metrics,
            best,
            centroid_selections: selections,
            centroids: tensor_to_array(centroids.as_tensor())?,
            embeddings: tensor_to_array(&step.embeddings.detach())?,
            assignment,
            attention: step.attention,
        })
    }

    fn find_centroids(&mut self, embeddings: &Tensor) -> Result<Var> {
        let start = Instant::now();
        let host = tensor_to_array(&embeddings.detach())?;
        let centroids = self
            .strategy
            .select_centroids(self.graph, host.view(), self.n_clusters)?;
        info!(
            "Finished centroids finding operation ({}): {:.3?}",
            self.strategy.name(),
            start.elapsed()
        );
        debug!("Centroids: {centroids:?}");
        Ok(Var::from_tensor(&array_to_tensor(centroids.view(), &self.device)?)?)
    }

    /// 한 에폭 학습. 매개변수와 centroid 를 갱신한다.
    pub(crate) fn train_epoch(
        &mut self,
        epoch: usize,
        choose_centroids: bool,
        features: &Tensor,
        state: &mut TrainingState,
        optimizer: &mut AdamW,
        scheduler: &mut StepScheduler,
    ) -> Result<EpochStep> {
        let encoded = self.network.encode(features, &self.structure)?;
        let z = &encoded.embeddings;

        if choose_centroids {
            state.centroids = Some(self.find_centroids(z)?);
        }
        let Some(centroids) = state.centroids.as_ref() else {
            error!("Centroids must be chosen first. Aborting!");
            return Err(GaeError::MissingCentroids);
        };

        let q = calculate_q(centroids.as_tensor(), z)?;
        // epoch 0 은 항상 경계이므로 이후 target 은 채워져 있다
        let target = match state.target.take() {
            Some(p) if epoch % self.config.p_interval != 0 => p,
            _ => calculate_p(&q)?,
        };
        let kl = kl_div_loss(&q, &target)?;
        state.target = Some(target);
        let clustering_loss = f64::from(kl.value()?);

        let recon = self.network.reconstruction_loss(z, self.graph.edges())?;
        let total = recon.add(&kl.loss.affine(self.config.c_loss_gamma, 0.0)?)?;
        let grads = total.backward()?;

        if epoch != 0 && clustering_loss != 0.0 {
            let gradient = centroid_gradient(centroids, z, &kl.p)?;
            let moved = update_clusters_centers(
                centroids.as_tensor(),
                &gradient,
                self.config.update_clusters_step_size,
            )?;
            centroids.set(&moved)?;
        }

        optimizer.step(&grads)?;
        scheduler.step(optimizer);

        Ok(EpochStep {
            total_loss: f64::from(total.to_scalar::<f32>()?),
            clustering_loss,
            reconstruction_loss: f64::from(recon.to_scalar::<f32>()?),
            q: kl.q.detach(),
            embeddings: z.detach(),
            attention: encoded.attention,
        })
    }

    fn evaluate(&self, epoch: usize, assignment: &[usize]) -> Result<MetricsRecord> {
        let modularity = modularity(self.graph, assignment)?;
        let (nmi, ari) = match self.graph.labels() {
            Some(labels) => (
                Some(normalized_mutual_info(labels, assignment)?),
                Some(adjusted_rand_index(labels, assignment)?),
            ),
            None => (None, None),
        };
        info!("=> Modularity: {modularity}");
        if let (Some(nmi), Some(ari)) = (nmi, ari) {
            info!("=> NMI: {nmi}");
            info!("=> ARI: {ari}");
        }
        Ok(MetricsRecord { epoch, modularity, nmi, ari })
    }
}

/// 고정된 임베딩에서 ∂Lc/∂C
///
/// 임베딩을 분리해 인코더 그래프를 다시 거치지 않는다.
fn centroid_gradient(centroids: &Var, embeddings: &Tensor, target: &Tensor) -> Result<Tensor> {
    let q = calculate_q(centroids.as_tensor(), &embeddings.detach())?;
    let grads = kl_div_loss(&q, target)?.loss.backward()?;
    match grads.get(centroids.as_tensor()) {
        Some(gradient) => Ok(gradient.clone()),
        None => Ok(centroids.as_tensor().zeros_like()?),
    }
}
