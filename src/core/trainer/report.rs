//! 에폭 기록과 실행 결과 출력
//!
//! 보고 싱크는 쓰기 전용이며 학습 루프는 기록을 다시 읽지 않는다.

use crate::core::encoder::EdgeAttention;
use crate::core::metrics::BestMetrics;
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::info;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 에폭별 손실
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossRecord {
    pub epoch: usize,
    pub total_loss: f64,
    pub clustering_loss: f64,
    pub reconstruction_loss: f64,
}

/// 에폭별 지표 (레이블이 없으면 NMI/ARI 는 비어 있음)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub epoch: usize,
    pub modularity: f64,
    pub nmi: Option<f64>,
    pub ari: Option<f64>,
}

/// 한 번의 학습 실행 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub strategy: String,
    pub n_clusters: usize,
    pub losses: Vec<LossRecord>,
    pub metrics: Vec<MetricsRecord>,
    pub best: BestMetrics,
    /// centroid 를 (재)선택한 에폭들
    pub centroid_selections: Vec<usize>,
    /// 마지막 에폭 이후의 centroid
    pub centroids: Array2<f32>,
    pub embeddings: Array2<f32>,
    pub assignment: Vec<usize>,
    pub attention: EdgeAttention,
}

impl RunReport {
    pub fn final_loss(&self) -> Option<&LossRecord> {
        self.losses.last()
    }

    /// 모든 출력을 싱크로 전달
    pub fn publish(&self, sink: &mut dyn ReportSink) -> Result<()> {
        sink.write_losses(&self.losses)?;
        sink.write_metrics(&self.metrics)?;
        sink.write_clustering(self)
    }
}

/// 보고 출력 대상
pub trait ReportSink {
    fn write_losses(&mut self, records: &[LossRecord]) -> Result<()>;
    fn write_metrics(&mut self, records: &[MetricsRecord]) -> Result<()>;
    /// centroid, 임베딩, 할당 등 시각화용 스냅샷
    fn write_clustering(&mut self, report: &RunReport) -> Result<()>;
}

/// 디렉터리에 `loss_log.csv`, `metrics_log.csv`, `clustering.json` 작성
pub struct CsvReportWriter {
    dir: PathBuf,
}

impl CsvReportWriter {
    pub const LOSS_FILE: &'static str = "loss_log.csv";
    pub const METRICS_FILE: &'static str = "metrics_log.csv";
    pub const CLUSTERING_FILE: &'static str = "clustering.json";

    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_csv<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let path = self.dir.join(file);
        let mut writer = csv::Writer::from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        info!("{} 행 기록: {}", records.len(), path.display());
        Ok(())
    }
}

impl ReportSink for CsvReportWriter {
    fn write_losses(&mut self, records: &[LossRecord]) -> Result<()> {
        self.write_csv(Self::LOSS_FILE, records)
    }

    fn write_metrics(&mut self, records: &[MetricsRecord]) -> Result<()> {
        self.write_csv(Self::METRICS_FILE, records)
    }

    fn write_clustering(&mut self, report: &RunReport) -> Result<()> {
        let path = self.dir.join(Self::CLUSTERING_FILE);
        let file = fs::File::create(&path)?;
        serde_json::to_writer(std::io::BufWriter::new(file), report)?;
        info!("클러스터링 스냅샷 기록: {}", path.display());
        Ok(())
    }
}
