//! 지표별 최고 값 기록

use serde::{Deserialize, Serialize};

/// 가장 좋았던 에폭과 값
///
/// 초기값은 (0, 0.0) 이고 이후 값이 엄격히 클 때만 갱신된다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BestMetricRecord {
    pub epoch: usize,
    pub value: f64,
}

impl BestMetricRecord {
    /// 갱신되면 true
    pub fn update(&mut self, epoch: usize, value: f64) -> bool {
        if value > self.value {
            self.epoch = epoch;
            self.value = value;
            true
        } else {
            false
        }
    }
}

/// 실행 전체의 최고 기록 묶음
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BestMetrics {
    pub modularity: BestMetricRecord,
    pub nmi: BestMetricRecord,
    pub ari: BestMetricRecord,
}

impl BestMetrics {
    pub fn observe(&mut self, epoch: usize, modularity: f64, nmi: Option<f64>, ari: Option<f64>) {
        self.modularity.update(epoch, modularity);
        if let Some(nmi) = nmi {
            self.nmi.update(epoch, nmi);
        }
        if let Some(ari) = ari {
            self.ari.update(epoch, ari);
        }
    }
}
