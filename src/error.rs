//! 크레이트 공통 에러 타입

use thiserror::Error;

/// 학습/클러스터링 파이프라인 에러
#[derive(Error, Debug)]
pub enum GaeError {
    /// 레지스트리에 없는 centroid 전략 이름
    #[error("unknown centroid strategy: {0}")]
    UnknownStrategy(String),

    /// 할당 계산 시점에 centroid 집합이 비어 있음
    #[error("centroids must be chosen before computing assignments")]
    MissingCentroids,

    /// 잘못된 하이퍼파라미터 / 설정
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// 그래프 입력 데이터 오류
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("tensor error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// 크레이트 전역 Result 별칭
pub type Result<T> = std::result::Result<T, GaeError>;
