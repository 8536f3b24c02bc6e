//! 에폭 단위 학습률 스케줄러

use super::config::LearningRateSchedule;
use candle_nn::Optimizer;
use log::debug;

/// 매 `step` 호출마다 스케줄을 한 칸 진행하고 옵티마이저 학습률을 갱신
#[derive(Debug, Clone)]
pub struct StepScheduler {
    base_lr: f64,
    schedule: LearningRateSchedule,
    steps: usize,
}

impl StepScheduler {
    pub fn new(base_lr: f64, schedule: LearningRateSchedule) -> Self {
        Self { base_lr, schedule, steps: 0 }
    }

    /// 현재 학습률
    pub fn learning_rate(&self) -> f64 {
        self.schedule.learning_rate(self.base_lr, self.steps)
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step<O: Optimizer>(&mut self, optimizer: &mut O) -> f64 {
        let before = self.learning_rate();
        self.steps += 1;
        let lr = self.learning_rate();
        if lr != before {
            debug!("학습률 변경: {before:e} -> {lr:e} (step {})", self.steps);
        }
        optimizer.set_learning_rate(lr);
        lr
    }
}
