use crate::core::graph::{Graph, StructuralIndex};
use ndarray::Array2;

#[test]
fn t_order_expands_to_two_hops() {
    // 0 - 1 - 2 - 3
    let graph = Graph::new(Array2::ones((4, 1)), vec![(0, 1), (1, 2), (2, 3)]).unwrap();
    let index = StructuralIndex::t_order(&graph, 2);

    let from_zero: Vec<_> = index
        .edges
        .iter()
        .zip(&index.weights)
        .filter(|((s, _), _)| *s == 0)
        .map(|((_, t), w)| (*t, *w))
        .collect();
    assert_eq!(from_zero, vec![(1, 1.0), (2, 0.5)]);

    // 대칭: 모든 (s, t) 에 대해 (t, s) 가 존재
    for &(s, t) in &index.edges {
        assert!(index.edges.contains(&(t, s)));
    }
    assert!(!index.edges.contains(&(0, 3)));
}

#[test]
fn first_order_equals_undirected_adjacency() {
    let graph = Graph::new(Array2::ones((3, 1)), vec![(0, 1), (1, 2)]).unwrap();
    let index = StructuralIndex::t_order(&graph, 1);
    assert_eq!(index.len(), 4);
    assert!(index.weights.iter().all(|&w| w == 1.0));
}
