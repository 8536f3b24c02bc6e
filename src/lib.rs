//! GAE 클러스터링 라이브러리
//!
//! 그래프 어텐션 오토인코더의 임베딩 학습과 클러스터 할당을 동시에
//! 최적화한다. centroid 는 교체 가능한 전략으로 고르고, 손실 정체가
//! 길어지면 다시 고른다.

pub mod core;
pub mod error;

// 핵심 타입 재수출
pub use crate::core::{
    CentroidRegistry, CentroidStrategy, CsvReportWriter, EmbeddingNetwork, GaeRunner, GatEncoder,
    Graph, ReportSink, RunReport, StructuralIndex, TrainingConfig,
};
pub use error::{GaeError, Result};
