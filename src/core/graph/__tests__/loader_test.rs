use crate::core::graph::{disjoint_cliques, load_csv, load_json, save_json};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn json_save_then_load_preserves_graph() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let graph = disjoint_cliques(2, 3).unwrap();

    save_json(&graph, &path).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(loaded.num_nodes(), 6);
    assert_eq!(loaded.edges(), graph.edges());
    assert_eq!(loaded.labels(), graph.labels());
    assert_eq!(loaded.features(), graph.features());
}

#[test]
fn csv_edge_list_without_features_uses_identity() {
    let dir = tempdir().unwrap();
    let edges = dir.path().join("edges.csv");
    let labels = dir.path().join("labels.csv");
    writeln!(std::fs::File::create(&edges).unwrap(), "0,1\n1,2\n2, 3").unwrap();
    writeln!(std::fs::File::create(&labels).unwrap(), "0\n0\n1\n1").unwrap();

    let graph = load_csv(&edges, None, Some(labels.as_path())).unwrap();
    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_features(), 4);
    assert_eq!(graph.edges(), &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(graph.labels(), Some(&[0, 0, 1, 1][..]));
}

#[test]
fn csv_rejects_bad_index() {
    let dir = tempdir().unwrap();
    let edges = dir.path().join("edges.csv");
    writeln!(std::fs::File::create(&edges).unwrap(), "0,x").unwrap();
    assert!(load_csv(&edges, None, None).is_err());
}
