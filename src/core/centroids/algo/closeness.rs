//! 근접 중심성 (Wasserman–Faust 보정, 비가중)

use petgraph::graph::UnGraph;
use std::collections::VecDeque;

#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &UnGraph<usize, f64>) -> Vec<f64> {
    let n = graph.node_count();
    let mut scores = vec![0.0; n];
    if n < 2 {
        return scores;
    }

    let mut dist = vec![usize::MAX; n];
    for source in graph.node_indices() {
        dist.iter_mut().for_each(|d| *d = usize::MAX);
        dist[source.index()] = 0;
        let mut queue = VecDeque::from([source]);
        let mut total = 0usize;
        let mut reached = 1usize;

        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(v) {
                if dist[w.index()] == usize::MAX {
                    dist[w.index()] = dist[v.index()] + 1;
                    total += dist[w.index()];
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }

        if total > 0 {
            let r = (reached - 1) as f64;
            scores[source.index()] = (r / total as f64) * (r / (n - 1) as f64);
        }
    }
    scores
}
