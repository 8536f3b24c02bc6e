//! 임베딩 네트워크 계약

use crate::core::graph::StructuralIndex;
use crate::error::Result;
use candle_core::{Tensor, Var};
use serde::{Deserialize, Serialize};

/// 마지막 어텐션 층의 간선별 가중치
///
/// `edges[e] = (source, target)` 이고 `weights[e]` 는 target 노드가
/// source 로부터 받은 정규화된 어텐션 값이다. 자기 루프가 포함된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttention {
    pub edges: Vec<(usize, usize)>,
    pub weights: Vec<f32>,
}

impl EdgeAttention {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// 순전파 결과
#[derive(Debug, Clone)]
pub struct Encoded {
    /// N×d 임베딩 (미분 가능)
    pub embeddings: Tensor,
    pub attention: EdgeAttention,
}

/// 학습 루프가 다루는 미분 가능한 임베딩 네트워크
///
/// 내부 구조는 자유이며 루프는 다음 세 가지 연산만 사용한다.
/// 매개변수 갱신은 `trainable_vars` 로 만든 옵티마이저가 담당한다.
pub trait EmbeddingNetwork {
    /// 노드 특징과 구조 인덱스로 임베딩 계산
    fn encode(&self, features: &Tensor, structure: &StructuralIndex) -> Result<Encoded>;

    /// 원본 간선 집합에 대한 재구성 손실 (스칼라)
    ///
    /// 음성 샘플링처럼 내부 난수 상태를 쓸 수 있어 `&mut self` 를 받는다.
    fn reconstruction_loss(&mut self, embeddings: &Tensor, edges: &[(usize, usize)]) -> Result<Tensor>;

    /// 옵티마이저가 갱신할 매개변수
    fn trainable_vars(&self) -> Vec<Var>;
}
