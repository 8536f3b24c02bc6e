//! # 그래프 모듈
//!
//! 입력 그래프 데이터 모델, t-차 이웃 구조 인덱스, 속성 유사도 기반
//! 간선 가중치, 데이터 로더와 합성 그래프 생성기

pub mod graph;
pub mod structural;
pub mod distance;
pub mod loader;
pub mod synthetic;

pub use graph::Graph;
pub use structural::StructuralIndex;
pub use distance::{graph_attr_distances, define_weights, apply_weights, Mechanism, WeightTransform};
pub use loader::{load_json, save_json, load_csv};
pub use synthetic::{disjoint_cliques, planted_partition, PlantedPartitionConfig};

#[cfg(test)]
mod __tests__;
