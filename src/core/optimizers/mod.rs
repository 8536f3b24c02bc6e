//! # 옵티마이저 모듈
//!
//! 인코더 매개변수 갱신은 `candle_nn::AdamW` 가 수행하고, 이 모듈은
//! 그 구성과 에폭 단위 학습률 스케줄을 담당한다.

pub mod config;
pub mod scheduler;

pub use config::{AdamConfig, LearningRateSchedule, OptimizerConfig};
pub use scheduler::StepScheduler;
