//! # 클러스터링 손실 엔진
//!
//! DEC 방식 자기 학습 클러스터링 목적 함수:
//! 소프트 할당 Q, 날카롭게 만든 목표 분포 P, KL(P || Q) 손실,
//! 그리고 centroid 경사 하강 갱신 규칙

pub mod clustering_loss;

pub use clustering_loss::{
    calculate_p, calculate_q, hard_assignment, kl_div_loss, update_clusters_centers,
    KlDivergence, LOG_EPSILON,
};
