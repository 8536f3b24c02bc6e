//! k-core 분해 (최소 차수 노드를 반복 제거)

use petgraph::graph::UnGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// 노드별 core number
pub fn core_numbers(graph: &UnGraph<usize, f64>) -> Vec<usize> {
    let n = graph.node_count();
    let mut degree: Vec<usize> = graph.node_indices().map(|v| graph.neighbors(v).count()).collect();
    let mut removed = vec![false; n];
    let mut core = vec![0; n];
    let mut heap: BinaryHeap<Reverse<(usize, usize)>> =
        degree.iter().enumerate().map(|(v, &d)| Reverse((d, v))).collect();

    let mut k = 0;
    while let Some(Reverse((d, v))) = heap.pop() {
        if removed[v] || d != degree[v] {
            continue;
        }
        k = k.max(d);
        core[v] = k;
        removed[v] = true;
        for w in graph.neighbors(petgraph::graph::NodeIndex::new(v)) {
            let w = w.index();
            if !removed[w] {
                degree[w] -= 1;
                heap.push(Reverse((degree[w], w)));
            }
        }
    }
    core
}
