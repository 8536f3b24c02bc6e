//! Q / P / KL 계산과 centroid 갱신
//!
//! 모든 함수는 상태를 갖지 않는다. 입력 텐서는 읽기 전용이며
//! 결과는 새 텐서로 돌려준다.

use crate::error::Result;
use candle_core::{Tensor, D};

/// log(0) 방지용 오프셋
pub const LOG_EPSILON: f64 = 1e-12;

/// 소프트 할당 분포 Q (N×k)
///
/// ```text
/// a_ij = (1 + ||z_i - c_j||²)^-1,   q_ij = a_ij / Σ_j a_ij
/// ```
///
/// 임베딩과 centroid 모두에 대해 미분 가능하다.
pub fn calculate_q(centroids: &Tensor, embeddings: &Tensor) -> Result<Tensor> {
    let z = embeddings.unsqueeze(1)?; // (N, 1, d)
    let c = centroids.unsqueeze(0)?; // (1, k, d)
    let dist2 = z.broadcast_sub(&c)?.sqr()?.sum(D::Minus1)?; // (N, k)
    let affinity = dist2.affine(1.0, 1.0)?.recip()?;
    let q = affinity.broadcast_div(&affinity.sum_keepdim(1)?)?;
    Ok(q)
}

/// 자기 학습 목표 분포 P (N×k)
///
/// ```text
/// p_ij ∝ q_ij² / f_j,   f_j = Σ_i q_ij
/// ```
///
/// 확신 있는 할당은 강화되고 큰 클러스터는 약화된다.
/// 결과는 상수 목표이므로 계산 그래프에서 분리된다.
pub fn calculate_p(q: &Tensor) -> Result<Tensor> {
    let q = q.detach();
    let frequency = q.sum_keepdim(0)?; // (1, k)
    let weight = q.sqr()?.broadcast_div(&frequency)?;
    let p = weight.broadcast_div(&weight.sum_keepdim(1)?)?;
    Ok(p)
}

/// KL 발산 결과와 그 입력 분포
#[derive(Debug, Clone)]
pub struct KlDivergence {
    /// 스칼라 Lc = Σ_i Σ_j p_ij log(p_ij / q_ij)
    pub loss: Tensor,
    pub q: Tensor,
    pub p: Tensor,
}

impl KlDivergence {
    pub fn value(&self) -> Result<f32> {
        Ok(self.loss.to_dtype(candle_core::DType::F32)?.to_scalar::<f32>()?)
    }
}

pub fn kl_div_loss(q: &Tensor, p: &Tensor) -> Result<KlDivergence> {
    let log_p = p.affine(1.0, LOG_EPSILON)?.log()?;
    let log_q = q.affine(1.0, LOG_EPSILON)?.log()?;
    let loss = p.mul(&log_p.sub(&log_q)?)?.sum_all()?;
    Ok(KlDivergence { loss, q: q.clone(), p: p.clone() })
}

/// 고정 스텝 경사 하강: C' = C - step · ∂Lc/∂C
pub fn update_clusters_centers(
    centroids: &Tensor,
    gradient: &Tensor,
    step_size: f64,
) -> Result<Tensor> {
    Ok(centroids.detach().sub(&gradient.affine(step_size, 0.0)?)?)
}

/// 행별 argmax 로 얻는 하드 클러스터 할당
pub fn hard_assignment(q: &Tensor) -> Result<Vec<usize>> {
    Ok(q.argmax(1)?
        .to_vec1::<u32>()?
        .into_iter()
        .map(|c| c as usize)
        .collect())
}
