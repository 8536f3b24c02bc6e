use crate::error::{GaeError, Result};
use candle_nn::ParamsAdamW;
use serde::{Deserialize, Serialize};

/// Optimizer 전체 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Adam 구성
    pub adam: AdamConfig,
    /// 초기 학습률
    pub learning_rate: f64,
    /// 학습률 스케줄링
    pub lr_schedule: LearningRateSchedule,
    /// 가중치 감소 (0 이면 일반 Adam)
    pub weight_decay: f64,
}

/// Adam 옵티마이저 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdamConfig {
    /// 베타1 파라미터 (1차 모멘트 지수 감소율)
    pub beta1: f64,
    /// 베타2 파라미터 (2차 모멘트 지수 감소율)
    pub beta2: f64,
    /// 엡실론 (수치 안정성을 위한 작은 값)
    pub epsilon: f64,
}

/// 학습률 스케줄링 방법
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LearningRateSchedule {
    /// 고정 학습률
    Constant,
    /// 지수 감소: lr · rate^(step / decay_steps)
    ExponentialDecay { decay_rate: f64, decay_steps: usize },
    /// 스텝 감소: step_size 에폭마다 gamma 배
    StepDecay { step_size: usize, gamma: f64 },
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            adam: AdamConfig::default(),
            learning_rate: 1e-4,
            lr_schedule: LearningRateSchedule::default(),
            weight_decay: 0.0,
        }
    }
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

impl Default for LearningRateSchedule {
    fn default() -> Self {
        LearningRateSchedule::StepDecay { step_size: 20, gamma: 0.5 }
    }
}

impl LearningRateSchedule {
    /// `steps` 번 스케줄러 스텝 이후의 학습률
    pub fn learning_rate(&self, base: f64, steps: usize) -> f64 {
        match *self {
            LearningRateSchedule::Constant => base,
            LearningRateSchedule::ExponentialDecay { decay_rate, decay_steps } => {
                base * decay_rate.powf(steps as f64 / decay_steps as f64)
            }
            LearningRateSchedule::StepDecay { step_size, gamma } => {
                base * gamma.powi((steps / step_size) as i32)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            LearningRateSchedule::Constant => Ok(()),
            LearningRateSchedule::ExponentialDecay { decay_rate, decay_steps } => {
                if decay_steps == 0 || decay_rate <= 0.0 {
                    return Err(GaeError::InvalidConfig(format!(
                        "exponential decay needs positive rate and steps, got {decay_rate} / {decay_steps}"
                    )));
                }
                Ok(())
            }
            LearningRateSchedule::StepDecay { step_size, gamma } => {
                if step_size == 0 || gamma <= 0.0 {
                    return Err(GaeError::InvalidConfig(format!(
                        "step decay needs positive step size and gamma, got {step_size} / {gamma}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl OptimizerConfig {
    /// 새 구성 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Adam 구성 설정
    pub fn with_adam_config(mut self, config: AdamConfig) -> Self {
        self.adam = config;
        self
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// 학습률 스케줄 설정
    pub fn with_lr_schedule(mut self, schedule: LearningRateSchedule) -> Self {
        self.lr_schedule = schedule;
        self
    }

    /// 가중치 감소 설정
    pub fn with_weight_decay(mut self, decay: f64) -> Self {
        self.weight_decay = decay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.learning_rate.is_nan() || self.learning_rate <= 0.0 {
            return Err(GaeError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.weight_decay < 0.0 {
            return Err(GaeError::InvalidConfig("weight decay must be non-negative".into()));
        }
        self.lr_schedule.validate()
    }

    /// candle AdamW 매개변수로 변환
    pub fn to_params(&self) -> ParamsAdamW {
        ParamsAdamW {
            lr: self.learning_rate,
            beta1: self.adam.beta1,
            beta2: self.adam.beta2,
            eps: self.adam.epsilon,
            weight_decay: self.weight_decay,
        }
    }
}
