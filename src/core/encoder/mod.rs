//! # 인코더 모듈
//!
//! 학습 루프가 요구하는 임베딩 네트워크 계약(`EmbeddingNetwork`)과
//! 2층 그래프 어텐션 오토인코더 구현

pub mod network;
pub mod gat;
pub mod reconstruction;

pub use network::{EdgeAttention, EmbeddingNetwork, Encoded};
pub use gat::{GatEncoder, GatEncoderConfig, GatLayer, MASK_VALUE};
pub use reconstruction::{negative_edges, recon_loss, RECON_EPSILON};

#[cfg(test)]
mod __tests__;
