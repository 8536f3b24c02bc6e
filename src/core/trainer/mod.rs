//! # 학습 오케스트레이터
//!
//! 인코더 학습과 클러스터링 손실을 번갈아 최적화하는 에폭 루프.
//! centroid (재)선택, 목표 분포 갱신 주기, 정체 감지, 지표 기록을 담당한다.

pub mod config;
pub mod state;
pub mod report;
pub mod runner;

pub use config::TrainingConfig;
pub use state::{PlateauState, TrainingState};
pub use report::{CsvReportWriter, LossRecord, MetricsRecord, ReportSink, RunReport};
pub use runner::{EpochStep, GaeRunner};

#[cfg(test)]
mod __tests__;
