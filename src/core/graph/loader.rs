//! 그래프 데이터 로더
//!
//! - JSON: `{ "features": [[..]], "edges": [[u, v], ..], "labels": [..] }`
//! - CSV: 헤더 없는 `u,v` 간선 목록 + (옵션) 속성 행렬 / 레이블 파일

use super::Graph;
use crate::error::{GaeError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    features: Vec<Vec<f32>>,
    edges: Vec<(usize, usize)>,
    #[serde(default)]
    labels: Option<Vec<usize>>,
}

pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = File::open(path)?;
    let raw: GraphFile = serde_json::from_reader(BufReader::new(file))?;
    let features = rows_to_matrix(raw.features)?;
    let graph = Graph::new(features, raw.edges)?;
    match raw.labels {
        Some(labels) => graph.with_labels(labels),
        None => Ok(graph),
    }
}

pub fn save_json<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let raw = GraphFile {
        features: graph.features().outer_iter().map(|r| r.to_vec()).collect(),
        edges: graph.edges().to_vec(),
        labels: graph.labels().map(<[usize]>::to_vec),
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, &raw)?;
    Ok(())
}

/// CSV 간선 목록에서 그래프 로드
///
/// 속성 파일이 없으면 단위 행렬(one-hot) 속성을 사용한다.
pub fn load_csv<P: AsRef<Path>>(
    edges_path: P,
    features_path: Option<&Path>,
    labels_path: Option<&Path>,
) -> Result<Graph> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(edges_path)?;

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(GaeError::InvalidGraph(format!(
                "edge row needs two columns, got {}",
                record.len()
            )));
        }
        edges.push((parse_index(&record[0])?, parse_index(&record[1])?));
    }

    let features = match features_path {
        Some(path) => rows_to_matrix(read_float_rows(path)?)?,
        None => {
            let n = edges.iter().map(|&(u, v)| u.max(v) + 1).max().unwrap_or(0);
            Array2::eye(n)
        }
    };

    let graph = Graph::new(features, edges)?;
    match labels_path {
        Some(path) => {
            let labels = read_float_rows(path)?
                .into_iter()
                .filter_map(|row| row.first().copied())
                .map(|v| v as usize)
                .collect();
            graph.with_labels(labels)
        }
        None => Ok(graph),
    }
}

fn parse_index(field: &str) -> Result<usize> {
    field
        .parse()
        .map_err(|_| GaeError::InvalidGraph(format!("bad node index '{field}'")))
}

fn read_float_rows(path: &Path) -> Result<Vec<Vec<f32>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|f| {
                f.parse::<f32>()
                    .map_err(|_| GaeError::InvalidGraph(format!("bad numeric value '{f}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn rows_to_matrix(rows: Vec<Vec<f32>>) -> Result<Array2<f32>> {
    let n = rows.len();
    let d = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != d) {
        return Err(GaeError::InvalidGraph("ragged feature rows".into()));
    }
    Ok(Array2::from_shape_vec((n, d), rows.into_iter().flatten().collect())?)
}
