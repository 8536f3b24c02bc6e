//! # 평가 지표 모듈
//!
//! 하드 클러스터 할당에 대한 모듈러리티, NMI, ARI 와 최고 기록 추적.
//! 학습에는 관여하지 않고 보고용으로만 쓰인다.

pub mod modularity;
pub mod partition;
pub mod best;

pub use modularity::modularity;
pub use partition::{adjusted_rand_index, contingency_table, normalized_mutual_info};
pub use best::{BestMetricRecord, BestMetrics};

#[cfg(test)]
mod __tests__;
