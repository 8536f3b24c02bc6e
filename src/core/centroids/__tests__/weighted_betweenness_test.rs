use crate::core::centroids::{CentroidStrategy, WeightedBetweennessCentrality};
use crate::core::graph::Graph;
use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

#[test]
fn 경로_그래프_중심성_순위() {
    // 0 - 1 - 2 - 3 - 4
    let x = array![[1.0f32, 0.0], [0.9, 0.1], [0.5, 0.5], [0.1, 0.9], [0.0, 1.0]];
    let graph = Graph::new(x, vec![(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let strategy = WeightedBetweennessCentrality::default();

    // 경로에서 최단 경로는 유일하므로 가중치와 무관:
    // 노드 1, 3 은 3 쌍, 노드 2 는 4 쌍 위에 있음. 정규화 2 / ((n-1)(n-2)) = 1/6
    let scores = strategy.scores(&graph);
    let expected = [0.0, 0.5, 4.0 / 6.0, 0.5, 0.0];
    for (s, e) in scores.iter().zip(expected) {
        assert_abs_diff_eq!(*s, e, epsilon = 1e-9);
    }

    let z = Array2::from_shape_fn((5, 2), |(i, j)| (i * 2 + j) as f32);
    let mut strategy = strategy;
    // 동점(1, 3)은 인덱스 순
    assert_eq!(strategy.select_nodes(&graph, z.view(), 3).unwrap(), vec![2, 1, 3]);

    let centroids = strategy.select_centroids(&graph, z.view(), 2).unwrap();
    assert_eq!(centroids, array![[4.0f32, 5.0], [2.0, 3.0]]);
}

#[test]
fn attribute_weights_change_the_ranking() {
    // 4-사이클 0-1-2-3-0, 노드 3 만 속성이 다름
    // 간선 (2,3), (3,0) 은 유사도 0 → 거리 1000
    let x = array![[1.0f32, 0.0], [1.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let graph = Graph::new(x, vec![(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    let strategy = WeightedBetweennessCentrality::default();

    // 쌍 (0,2) 는 노드 1 을 경유, 쌍 (1,3) 은 0 과 2 를 반반 경유
    let scores = strategy.scores(&graph);
    let expected = [1.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0, 0.0];
    for (s, e) in scores.iter().zip(expected) {
        assert_abs_diff_eq!(*s, e, epsilon = 1e-9);
    }

    let z = Array2::zeros((4, 2));
    let mut strategy = strategy;
    assert_eq!(strategy.select_nodes(&graph, z.view(), 2).unwrap(), vec![1, 0]);
}

#[test]
fn too_many_clusters_is_an_error() {
    let graph = Graph::new(Array2::ones((2, 2)), vec![(0, 1)]).unwrap();
    let z = Array2::zeros((2, 2));
    let mut strategy = WeightedBetweennessCentrality::default();
    assert!(strategy.select_nodes(&graph, z.view(), 3).is_err());
}
