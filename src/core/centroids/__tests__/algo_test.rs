use crate::core::centroids::algo::{
    betweenness_centrality, closeness_centrality, core_numbers, eigenvector_centrality,
    greedy_modularity_communities, pagerank, BetweennessConfig, EigenvectorConfig,
    PageRankConfig,
};
use crate::core::graph::Graph;
use approx::assert_abs_diff_eq;
use ndarray::Array2;

fn graph_from(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::new(Array2::ones((n, 1)), edges.to_vec()).unwrap()
}

#[test]
fn unnormalized_betweenness_on_path_counts_pairs() {
    let g = graph_from(4, &[(0, 1), (1, 2), (2, 3)]).to_petgraph();
    let scores = betweenness_centrality(&g, BetweennessConfig { weighted: false, normalized: false });
    assert_eq!(scores, vec![0.0, 2.0, 2.0, 0.0]);
}

#[test]
fn star_center_has_all_betweenness() {
    let g = graph_from(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).to_petgraph();
    let scores = betweenness_centrality(&g, BetweennessConfig::default());
    assert_abs_diff_eq!(scores[0], 1.0, epsilon = 1e-12);
    assert!(scores[1..].iter().all(|&s| s == 0.0));
}

#[test]
fn 근접_중심성_경로() {
    let g = graph_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).to_petgraph();
    let scores = closeness_centrality(&g);
    assert_abs_diff_eq!(scores[2], 4.0 / 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scores[0], 4.0 / 10.0, epsilon = 1e-12);
}

#[test]
fn closeness_scales_by_reachable_fraction() {
    // 0 - 1,  2 고립
    let g = graph_from(3, &[(0, 1)]).to_petgraph();
    let scores = closeness_centrality(&g);
    assert_abs_diff_eq!(scores[0], 0.5, epsilon = 1e-12);
    assert_eq!(scores[2], 0.0);
}

#[test]
fn pagerank_sums_to_one_and_favours_hub() {
    let g = graph_from(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]).to_petgraph();
    let scores = pagerank(&g, PageRankConfig::default());
    assert_abs_diff_eq!(scores.iter().sum::<f64>(), 1.0, epsilon = 1e-6);
    assert!(scores[0] > scores[1]);
    assert!(scores[0] > scores[4]);
}

#[test]
fn eigenvector_symmetric_cycle_is_uniform() {
    let g = graph_from(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).to_petgraph();
    let scores = eigenvector_centrality(&g, EigenvectorConfig::default());
    for s in &scores {
        assert_abs_diff_eq!(*s, 0.5, epsilon = 1e-6);
    }
}

#[test]
fn core_numbers_triangle_with_tail() {
    let g = graph_from(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]).to_petgraph();
    assert_eq!(core_numbers(&g), vec![2, 2, 2, 1, 1]);
}

#[test]
fn greedy_modularity_splits_bridged_cliques() {
    let mut edges = Vec::new();
    for base in [0, 4] {
        for i in 0..4 {
            for j in (i + 1)..4 {
                edges.push((base + i, base + j));
            }
        }
    }
    edges.push((3, 4));
    let g = graph_from(8, &edges).to_petgraph();

    let communities = greedy_modularity_communities(&g, 1);
    assert_eq!(communities, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
}

#[test]
fn greedy_modularity_on_edgeless_graph_keeps_singletons() {
    let g = graph_from(3, &[]).to_petgraph();
    assert_eq!(greedy_modularity_communities(&g, 1), vec![vec![0], vec![1], vec![2]]);
}
