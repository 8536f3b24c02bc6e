//! Newman 모듈러리티 (무방향, 비가중)
//!
//! ```text
//! Q = Σ_c [ L_c / m - (d_c / 2m)² ]
//! ```
//!
//! L_c 는 커뮤니티 c 내부 간선 수, d_c 는 차수 합, m 은 전체 간선 수.

use crate::core::graph::Graph;
use crate::error::{GaeError, Result};
use std::collections::HashMap;

pub fn modularity(graph: &Graph, assignment: &[usize]) -> Result<f64> {
    if assignment.len() != graph.num_nodes() {
        return Err(GaeError::InvalidGraph(format!(
            "assignment has {} entries for {} nodes",
            assignment.len(),
            graph.num_nodes()
        )));
    }
    let edges = graph.undirected_edges();
    if edges.is_empty() {
        return Ok(0.0);
    }
    let m = edges.len() as f64;

    let mut internal: HashMap<usize, f64> = HashMap::new();
    let mut degree: HashMap<usize, f64> = HashMap::new();
    for &(u, v) in &edges {
        let (cu, cv) = (assignment[u], assignment[v]);
        *degree.entry(cu).or_default() += 1.0;
        *degree.entry(cv).or_default() += 1.0;
        if cu == cv {
            *internal.entry(cu).or_default() += 1.0;
        }
    }

    let q = degree
        .iter()
        .map(|(c, &d)| {
            let l = internal.get(c).copied().unwrap_or(0.0);
            l / m - (d / (2.0 * m)).powi(2)
        })
        .sum();
    Ok(q)
}
