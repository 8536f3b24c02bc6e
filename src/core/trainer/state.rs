//! 에폭 사이에 유지되는 학습 상태

use candle_core::{Tensor, Var};

/// 손실 정체 카운터
///
/// 직전 에폭보다 손실이 줄지 않으면 증가, 줄면 0 으로 돌아간다.
/// 첫 관측에는 비교 대상이 없으므로 증가하지 않는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlateauState {
    pub not_improving: usize,
    pub previous_loss: Option<f64>,
}

impl PlateauState {
    pub fn observe(&mut self, loss: f64) {
        match self.previous_loss {
            Some(previous) if loss >= previous => self.not_improving += 1,
            _ => self.not_improving = 0,
        }
        self.previous_loss = Some(loss);
    }

    pub fn reached(&self, limit: usize) -> bool {
        self.not_improving == limit
    }

    /// 재선택 시점에 카운터만 초기화 (직전 손실은 유지)
    pub fn reset(&mut self) {
        self.not_improving = 0;
    }
}

/// 오케스트레이터가 단독 소유하는 가변 상태
#[derive(Debug, Default)]
pub struct TrainingState {
    /// k×d centroid, 선택 전에는 None
    pub centroids: Option<Var>,
    /// 목표 분포 P, p_interval 경계에서만 교체
    pub target: Option<Tensor>,
    pub plateau: PlateauState,
}
