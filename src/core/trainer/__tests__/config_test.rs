use crate::core::optimizers::LearningRateSchedule;
use crate::core::trainer::TrainingConfig;
use crate::error::GaeError;
use std::io::Write;

#[test]
fn 기본_하이퍼파라미터() {
    let config = TrainingConfig::default();
    assert_eq!(config.epochs, 10);
    assert_eq!(config.find_centroids_alg, "KMeans");
    assert_eq!(config.c_loss_gamma, 20.0);
    assert_eq!(config.p_interval, 10);
    assert_eq!(config.optimizer.learning_rate, 1e-4);
    assert_eq!(
        config.optimizer.lr_schedule,
        LearningRateSchedule::StepDecay { step_size: 20, gamma: 0.5 }
    );
    assert_eq!(config.update_clusters_step_size, 1e-3);
    assert_eq!(config.not_improving_limit, 100);
    assert!(config.rechoose_centroids);
    assert_eq!((config.hidden_layer, config.output_layer), (256, 16));
    assert_eq!(config.t_order, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn validation_rejects_degenerate_values() {
    let cases = [
        TrainingConfig::new().with_epochs(0),
        TrainingConfig::new().with_p_interval(0),
        TrainingConfig::new().with_c_loss_gamma(-1.0),
        TrainingConfig::new().with_not_improving_limit(0),
        TrainingConfig::new().with_step_size(0.0),
        TrainingConfig::new().with_learning_rate(0.0),
        TrainingConfig::new().with_layers(0, 16),
        TrainingConfig::new().with_t_order(0),
        TrainingConfig::new().with_n_clusters(0),
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(GaeError::InvalidConfig(_))),
            "{config:?}"
        );
    }
}

#[test]
fn partial_json_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "epochs": 3, "find_centroids_alg": "PageRank", "seed": 7 }}"#).unwrap();

    let config = TrainingConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.epochs, 3);
    assert_eq!(config.find_centroids_alg, "PageRank");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.p_interval, 10);
}
