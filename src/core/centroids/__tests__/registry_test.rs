use crate::core::centroids::{CentroidRegistry, CentroidStrategy};
use crate::core::graph::Graph;
use crate::error::{GaeError, Result};
use ndarray::{Array2, ArrayView2};

struct FirstNodes;

impl CentroidStrategy for FirstNodes {
    fn name(&self) -> &'static str {
        "FirstNodes"
    }

    fn select_nodes(
        &mut self,
        _graph: &Graph,
        _embeddings: ArrayView2<'_, f32>,
        n_clusters: usize,
    ) -> Result<Vec<usize>> {
        Ok((0..n_clusters).collect())
    }
}

#[test]
fn 알수없는_전략은_치명적_오류() {
    let registry = CentroidRegistry::with_builtins();
    match registry.resolve("NoSuchStrategy", None) {
        Err(GaeError::UnknownStrategy(name)) => assert_eq!(name, "NoSuchStrategy"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("unknown strategy must not resolve"),
    }
}

#[test]
fn builtins_are_case_insensitive() {
    let registry = CentroidRegistry::default();
    assert_eq!(registry.names().len(), 10);
    for name in ["randomseeds", "WEIGHTEDBETWEENNESSCENTRALITY", "KMeans", "pagerank"] {
        assert!(registry.contains(name), "{name}");
        assert!(registry.resolve(name, Some(1)).is_ok());
    }
    let strategy = registry.resolve("kcore", None).unwrap();
    assert_eq!(strategy.name(), "KCore");
}

#[test]
fn custom_strategy_can_be_registered() {
    let mut registry = CentroidRegistry::new();
    registry.register("First", |_| Box::new(FirstNodes));

    let graph = Graph::new(Array2::ones((4, 2)), vec![(0, 1)]).unwrap();
    let z = Array2::from_shape_fn((4, 3), |(i, j)| (i * 3 + j) as f32);
    let mut strategy = registry.resolve("first", None).unwrap();
    let centroids = strategy.select_centroids(&graph, z.view(), 2).unwrap();

    assert_eq!(centroids.dim(), (2, 3));
    assert_eq!(centroids.row(1).to_vec(), vec![3.0, 4.0, 5.0]);
}

#[test]
fn mismatched_embedding_rows_are_rejected() {
    let graph = Graph::new(Array2::ones((4, 2)), vec![]).unwrap();
    let z = Array2::zeros((3, 2));
    let mut strategy = FirstNodes;
    assert!(strategy.select_centroids(&graph, z.view(), 1).is_err());
}
