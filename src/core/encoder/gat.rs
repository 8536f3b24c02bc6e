//! 그래프 어텐션 층과 2층 인코더
//!
//! 어텐션은 밀집 N×N 행렬로 계산하고 구조 인덱스(+자기 루프) 밖의
//! 위치는 큰 음수로 마스킹한 뒤 이웃 방향 softmax 를 취한다.
//!
//! ```text
//! e_ij   = LeakyReLU(a_dst · W h_i + a_src · W h_j)
//! α_ij   = softmax_j(e_ij),  j ∈ N(i) ∪ {i}
//! h_i'   = Σ_j α_ij W h_j + b
//! ```

use super::network::{EdgeAttention, EmbeddingNetwork, Encoded};
use super::reconstruction::recon_loss;
use crate::core::graph::StructuralIndex;
use crate::error::{GaeError, Result};
use candle_core::{Device, Tensor, Var, D};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 비이웃 위치에 더하는 마스크 값
pub const MASK_VALUE: f32 = -1e9;

/// Glorot 균등 분포로 초기화된 매개변수
fn glorot(rng: &mut StdRng, rows: usize, cols: usize, device: &Device) -> Result<Var> {
    let bound = (6.0 / (rows + cols) as f32).sqrt();
    let data: Vec<f32> = (0..rows * cols).map(|_| rng.gen_range(-bound..bound)).collect();
    Ok(Var::from_tensor(&Tensor::from_vec(data, (rows, cols), device)?)?)
}

/// 단일 그래프 어텐션 층 (다중 헤드는 이어붙임)
pub struct GatLayer {
    weight: Var,
    att_src: Var,
    att_dst: Var,
    bias: Var,
    heads: usize,
    out_channels: usize,
    negative_slope: f64,
}

impl GatLayer {
    pub fn new(
        in_channels: usize,
        out_channels: usize,
        heads: usize,
        negative_slope: f64,
        rng: &mut StdRng,
        device: &Device,
    ) -> Result<Self> {
        Ok(Self {
            weight: glorot(rng, in_channels, heads * out_channels, device)?,
            att_src: glorot(rng, heads, out_channels, device)?,
            att_dst: glorot(rng, heads, out_channels, device)?,
            bias: Var::zeros(heads * out_channels, candle_core::DType::F32, device)?,
            heads,
            out_channels,
            negative_slope,
        })
    }

    pub fn output_dim(&self) -> usize {
        self.heads * self.out_channels
    }

    /// `x`: N×in, `mask`: N×N (0 또는 MASK_VALUE)
    ///
    /// 반환: (N × heads·out 출력, heads×N×N 어텐션)
    pub fn forward(&self, x: &Tensor, mask: &Tensor) -> Result<(Tensor, Tensor)> {
        let n = x.dim(0)?;
        let h = x.matmul(self.weight.as_tensor())?;
        let h = h.reshape((n, self.heads, self.out_channels))?;

        let alpha_src = h.broadcast_mul(&self.att_src.as_tensor().unsqueeze(0)?)?.sum(D::Minus1)?; // (N, H)
        let alpha_dst = h.broadcast_mul(&self.att_dst.as_tensor().unsqueeze(0)?)?.sum(D::Minus1)?;

        // [h, i, j] = dst_i + src_j
        let dst = alpha_dst.t()?.unsqueeze(2)?; // (H, N, 1)
        let src = alpha_src.t()?.unsqueeze(1)?; // (H, 1, N)
        let scores = dst.broadcast_add(&src)?;
        let scores = scores.maximum(&scores.affine(self.negative_slope, 0.0)?)?;
        let scores = scores.broadcast_add(&mask.unsqueeze(0)?)?;
        let attention = candle_nn::ops::softmax(&scores, D::Minus1)?;

        let values = h.transpose(0, 1)?.contiguous()?; // (H, N, out)
        let out = attention.matmul(&values)?; // (H, N, out)
        let out = out
            .transpose(0, 1)?
            .contiguous()?
            .reshape((n, self.output_dim()))?
            .broadcast_add(self.bias.as_tensor())?;
        Ok((out, attention))
    }

    pub fn vars(&self) -> Vec<Var> {
        vec![
            self.weight.clone(),
            self.att_src.clone(),
            self.att_dst.clone(),
            self.bias.clone(),
        ]
    }
}

/// 인코더 층 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatEncoderConfig {
    pub in_channels: usize,
    pub hidden_channels: usize,
    pub out_channels: usize,
    pub heads: usize,
    /// LeakyReLU 음수 기울기
    pub negative_slope: f64,
}

impl GatEncoderConfig {
    pub fn new(in_channels: usize, hidden_channels: usize, out_channels: usize) -> Self {
        Self {
            in_channels,
            hidden_channels,
            out_channels,
            heads: 1,
            negative_slope: 0.2,
        }
    }

    pub fn with_heads(mut self, heads: usize) -> Self {
        self.heads = heads;
        self
    }
}

/// 2층 GAT 인코더 + 내적 디코더 재구성 손실
///
/// 첫 층은 `heads` 개 헤드를 이어붙이고 ReLU, 둘째 층은 단일 헤드이다.
pub struct GatEncoder {
    conv1: GatLayer,
    conv2: GatLayer,
    rng: StdRng,
    device: Device,
}

impl GatEncoder {
    pub fn new(config: &GatEncoderConfig, seed: Option<u64>, device: &Device) -> Result<Self> {
        if config.in_channels == 0 || config.hidden_channels == 0 || config.out_channels == 0 || config.heads == 0 {
            return Err(GaeError::InvalidConfig(format!(
                "encoder dimensions must be positive: {config:?}"
            )));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let conv1 = GatLayer::new(
            config.in_channels,
            config.hidden_channels,
            config.heads,
            config.negative_slope,
            &mut rng,
            device,
        )?;
        let conv2 = GatLayer::new(
            conv1.output_dim(),
            config.out_channels,
            1,
            config.negative_slope,
            &mut rng,
            device,
        )?;
        debug!(
            "GAT 인코더: {} -> {}x{} -> {}",
            config.in_channels, config.heads, config.hidden_channels, config.out_channels
        );
        Ok(Self { conv1, conv2, rng, device: device.clone() })
    }

    /// 구조 인덱스와 자기 루프만 0 인 N×N 마스크
    pub fn attention_mask(&self, n: usize, structure: &StructuralIndex) -> Result<Tensor> {
        let mut mask = vec![MASK_VALUE; n * n];
        for &(source, target) in &structure.edges {
            if source >= n || target >= n {
                return Err(GaeError::InvalidGraph(format!(
                    "structural edge ({source}, {target}) out of range for {n} nodes"
                )));
            }
            mask[target * n + source] = 0.0;
        }
        for i in 0..n {
            mask[i * n + i] = 0.0;
        }
        Ok(Tensor::from_vec(mask, (n, n), &self.device)?)
    }
}

impl EmbeddingNetwork for GatEncoder {
    fn encode(&self, features: &Tensor, structure: &StructuralIndex) -> Result<Encoded> {
        let n = features.dim(0)?;
        let mask = self.attention_mask(n, structure)?;

        let (hidden, _) = self.conv1.forward(features, &mask)?;
        let hidden = hidden.relu()?;
        let (embeddings, attention) = self.conv2.forward(&hidden, &mask)?;

        // 단일 헤드 (1, N, N) → 간선별 값
        let dense = attention.squeeze(0)?.to_vec2::<f32>()?;
        let mut edges = Vec::with_capacity(structure.len() + n);
        let mut weights = Vec::with_capacity(structure.len() + n);
        for &(source, target) in structure.edges.iter().filter(|(s, t)| s != t) {
            edges.push((source, target));
            weights.push(dense[target][source]);
        }
        for (i, row) in dense.iter().enumerate() {
            edges.push((i, i));
            weights.push(row[i]);
        }

        Ok(Encoded { embeddings, attention: EdgeAttention { edges, weights } })
    }

    fn reconstruction_loss(&mut self, embeddings: &Tensor, edges: &[(usize, usize)]) -> Result<Tensor> {
        recon_loss(embeddings, edges, &mut self.rng)
    }

    fn trainable_vars(&self) -> Vec<Var> {
        let mut vars = self.conv1.vars();
        vars.extend(self.conv2.vars());
        vars
    }
}
