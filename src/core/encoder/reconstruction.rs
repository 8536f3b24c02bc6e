//! 내적 디코더 기반 그래프 오토인코더 재구성 손실
//!
//! ```text
//! L = -mean log σ(z_i·z_j)          (양성 간선)
//!     -mean log (1 - σ(z_u·z_v))    (같은 수의 음성 쌍)
//! ```

use crate::error::{GaeError, Result};
use candle_core::{Tensor, D};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;

/// log(0) 방지용 오프셋
pub const RECON_EPSILON: f64 = 1e-15;

/// 간선 집합에 없는 (u, v) 쌍을 균등 추출
///
/// 자기 루프와 기존 간선(양방향)은 제외한다. 그래프가 조밀해서
/// 후보를 찾지 못하면 시도 횟수 제한 안에서 얻은 만큼만 돌려준다.
pub fn negative_edges(
    rng: &mut StdRng,
    num_nodes: usize,
    edges: &[(usize, usize)],
    count: usize,
) -> Vec<(usize, usize)> {
    if num_nodes < 2 {
        return Vec::new();
    }
    let existing: HashSet<(usize, usize)> = edges
        .iter()
        .flat_map(|&(u, v)| [(u, v), (v, u)])
        .collect();

    let mut sampled = Vec::with_capacity(count);
    let max_attempts = count.saturating_mul(20).max(100);
    for _ in 0..max_attempts {
        if sampled.len() == count {
            break;
        }
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        if u != v && !existing.contains(&(u, v)) {
            sampled.push((u, v));
        }
    }
    sampled
}

/// 쌍별 내적 로짓의 σ 를 취한 N_pairs 텐서
fn pair_probabilities(z: &Tensor, pairs: &[(usize, usize)]) -> Result<Tensor> {
    let device = z.device();
    let src: Vec<u32> = pairs.iter().map(|&(u, _)| u as u32).collect();
    let dst: Vec<u32> = pairs.iter().map(|&(_, v)| v as u32).collect();
    let src = Tensor::from_vec(src, pairs.len(), device)?;
    let dst = Tensor::from_vec(dst, pairs.len(), device)?;
    let logits = z
        .index_select(&src, 0)?
        .mul(&z.index_select(&dst, 0)?)?
        .sum(D::Minus1)?;
    Ok(candle_nn::ops::sigmoid(&logits)?)
}

pub fn recon_loss(z: &Tensor, edges: &[(usize, usize)], rng: &mut StdRng) -> Result<Tensor> {
    if edges.is_empty() {
        return Err(GaeError::InvalidGraph(
            "reconstruction loss needs at least one edge".into(),
        ));
    }
    let num_nodes = z.dim(0)?;
    if let Some(&(u, v)) = edges.iter().find(|&&(u, v)| u >= num_nodes || v >= num_nodes) {
        return Err(GaeError::InvalidGraph(format!(
            "edge ({u}, {v}) out of range for {num_nodes} embeddings"
        )));
    }

    let positive = pair_probabilities(z, edges)?;
    let mut loss = positive.affine(1.0, RECON_EPSILON)?.log()?.mean_all()?.neg()?;

    let negatives = negative_edges(rng, num_nodes, edges, edges.len());
    if !negatives.is_empty() {
        let negative = pair_probabilities(z, &negatives)?;
        let negative_loss = negative
            .affine(-1.0, 1.0 + RECON_EPSILON)?
            .log()?
            .mean_all()?
            .neg()?;
        loss = loss.add(&negative_loss)?;
    }
    Ok(loss)
}
