use candle_core::Device;
use gae_cluster::core::graph::disjoint_cliques;
use gae_cluster::{CentroidRegistry, GaeRunner, TrainingConfig};

fn clique_config(seed: u64) -> TrainingConfig {
    TrainingConfig::new()
        .with_epochs(20)
        .with_strategy("RandomSeeds")
        .with_layers(16, 4)
        .with_learning_rate(1e-3)
        .with_p_interval(5)
        .with_seed(seed)
}

#[test]
fn 두_클리크가_각각_한_클러스터로_모임() {
    let graph = disjoint_cliques(2, 5).unwrap();
    let registry = CentroidRegistry::with_builtins();
    let mut separated = 0;

    for seed in 0..8 {
        let report = GaeRunner::with_gat_encoder(clique_config(seed), &graph, &registry, &Device::Cpu)
            .unwrap()
            .run()
            .unwrap();

        let (first, second) = report.assignment.split_at(5);
        assert!(first.iter().all(|&c| c == first[0]), "seed {seed}: {:?}", report.assignment);
        assert!(second.iter().all(|&c| c == second[0]), "seed {seed}: {:?}", report.assignment);
        assert_eq!(report.losses.len(), 20);
        assert!(report.losses.iter().all(|l| l.total_loss.is_finite()));

        if first[0] != second[0] {
            separated += 1;
            let last = report.metrics.last().unwrap();
            assert!((last.nmi.unwrap() - 1.0).abs() < 1e-9);
            assert!((last.ari.unwrap() - 1.0).abs() < 1e-9);
        }
    }
    // 두 centroid 가 서로 다른 클리크에서 뽑힌 실행은 클리크를 분리한다
    assert!(separated > 0);
}

#[test]
fn attention_output_covers_structure_and_self_loops() {
    let graph = disjoint_cliques(2, 5).unwrap();
    let report = GaeRunner::with_gat_encoder(
        clique_config(3).with_epochs(2),
        &graph,
        &CentroidRegistry::with_builtins(),
        &Device::Cpu,
    )
    .unwrap()
    .run()
    .unwrap();

    // 클리크 내부 20 간선 × 2 + 자기 루프 10
    assert_eq!(report.attention.len(), 50);
    assert_eq!(report.embeddings.dim(), (10, 4));
    assert_eq!(report.centroids.dim(), (2, 4));
    assert_eq!(report.centroid_selections, vec![0]);
}
