//! Clauset–Newman–Moore 탐욕적 모듈러리티 응집
//!
//! e_ij = 커뮤니티 i, j 사이 간선 끝점 비율, a_i = 커뮤니티 i 의 끝점 비율.
//! 매 단계 ΔQ = 2 (e_ij - a_i a_j) 가 최대인 인접 쌍을 병합한다.

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;

/// 간선 가중치를 사용해 커뮤니티를 찾는다
///
/// ΔQ 가 양수인 병합이 없거나 커뮤니티 수가 `min_communities` 에 도달하면
/// 멈춘다. 결과는 크기 내림차순 (동점은 최소 노드 인덱스 순), 각 커뮤니티의
/// 노드는 오름차순이다.
pub fn greedy_modularity_communities(
    graph: &UnGraph<usize, f64>,
    min_communities: usize,
) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    let mut members: Vec<Option<Vec<usize>>> = (0..n).map(|v| Some(vec![v])).collect();

    let total: f64 = graph
        .edge_references()
        .filter(|e| e.source() != e.target())
        .map(|e| *e.weight())
        .sum();

    if total > 0.0 {
        let m2 = 2.0 * total;
        let mut a = vec![0.0_f64; n];
        let mut e: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
        for edge in graph.edge_references() {
            let (u, v) = (edge.source().index(), edge.target().index());
            if u == v {
                continue;
            }
            let w = *edge.weight() / m2;
            *e[u].entry(v).or_insert(0.0) += w;
            *e[v].entry(u).or_insert(0.0) += w;
            a[u] += w;
            a[v] += w;
        }

        let mut alive = n;
        while alive > min_communities.max(1) {
            let mut best: Option<(f64, usize, usize)> = None;
            for (i, row) in e.iter().enumerate() {
                for (&j, &e_ij) in row.range(i + 1..) {
                    let dq = 2.0 * (e_ij - a[i] * a[j]);
                    if best.map_or(true, |(b, _, _)| dq > b) {
                        best = Some((dq, i, j));
                    }
                }
            }

            let Some((dq, i, j)) = best else { break };
            if dq <= 0.0 {
                break;
            }

            // j 를 i 로 병합
            let row_j = std::mem::take(&mut e[j]);
            for (k, w) in row_j {
                if k == i {
                    continue;
                }
                e[k].remove(&j);
                *e[k].entry(i).or_insert(0.0) += w;
                *e[i].entry(k).or_insert(0.0) += w;
            }
            e[i].remove(&j);
            a[i] += a[j];
            a[j] = 0.0;
            let moved = members[j].take().unwrap_or_default();
            if let Some(target) = members[i].as_mut() {
                target.extend(moved);
            }
            alive -= 1;
        }
    }

    let mut communities: Vec<Vec<usize>> = members.into_iter().flatten().collect();
    for c in &mut communities {
        c.sort_unstable();
    }
    communities.sort_by(|x, y| y.len().cmp(&x.len()).then_with(|| x[0].cmp(&y[0])));
    communities
}
