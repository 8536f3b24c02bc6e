//! # 그래프 임베딩-클러스터링 핵심 모듈
//!
//! GAT 인코더 학습과 DEC 방식 클러스터링 손실을 하나의 루프로 묶는다.

pub mod graph;
pub mod tensors;
pub mod centroids;
pub mod clustering;
pub mod encoder;
pub mod optimizers;
pub mod metrics;
pub mod trainer;

// 주요 타입들 재수출
pub use graph::{Graph, StructuralIndex};
pub use centroids::{CentroidRegistry, CentroidStrategy};
pub use clustering::KlDivergence;
pub use encoder::{EmbeddingNetwork, GatEncoder, GatEncoderConfig};
pub use optimizers::{LearningRateSchedule, OptimizerConfig};
pub use metrics::{BestMetricRecord, BestMetrics};
pub use trainer::{CsvReportWriter, GaeRunner, ReportSink, RunReport, TrainingConfig};
