use crate::core::encoder::{EmbeddingNetwork, GatEncoder, GatEncoderConfig, MASK_VALUE};
use crate::core::graph::{disjoint_cliques, StructuralIndex};
use crate::core::tensors::array_to_tensor;
use approx::assert_abs_diff_eq;
use candle_core::Device;
use std::collections::HashMap;

fn encoder(in_channels: usize, seed: u64) -> GatEncoder {
    let config = GatEncoderConfig::new(in_channels, 8, 4).with_heads(2);
    GatEncoder::new(&config, Some(seed), &Device::Cpu).unwrap()
}

#[test]
fn 임베딩_크기() {
    let graph = disjoint_cliques(2, 4).unwrap();
    let structure = StructuralIndex::t_order(&graph, 2);
    let features = array_to_tensor(graph.features(), &Device::Cpu).unwrap();

    let encoded = encoder(graph.num_features(), 1).encode(&features, &structure).unwrap();
    assert_eq!(encoded.embeddings.dims2().unwrap(), (8, 4));
    // 구조 간선 + 노드별 자기 루프
    assert_eq!(encoded.attention.len(), structure.len() + 8);
}

#[test]
fn attention_is_normalised_per_target() {
    let graph = disjoint_cliques(3, 3).unwrap();
    let structure = StructuralIndex::t_order(&graph, 1);
    let features = array_to_tensor(graph.features(), &Device::Cpu).unwrap();
    let encoded = encoder(graph.num_features(), 7).encode(&features, &structure).unwrap();

    let mut totals: HashMap<usize, f32> = HashMap::new();
    for (&(_, target), &w) in encoded.attention.edges.iter().zip(&encoded.attention.weights) {
        assert!(w >= 0.0);
        *totals.entry(target).or_default() += w;
    }
    assert_eq!(totals.len(), 9);
    for total in totals.values() {
        assert_abs_diff_eq!(*total, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn mask_opens_structure_and_self_loops_only() {
    let graph = disjoint_cliques(1, 2).unwrap();
    let structure = StructuralIndex::t_order(&graph, 1);
    let enc = encoder(graph.num_features(), 3);

    let mask = enc.attention_mask(3, &structure).unwrap().to_vec2::<f32>().unwrap();
    assert_eq!(mask[0], vec![0.0, 0.0, MASK_VALUE]);
    assert_eq!(mask[1], vec![0.0, 0.0, MASK_VALUE]);
    assert_eq!(mask[2], vec![MASK_VALUE, MASK_VALUE, 0.0]);
}

#[test]
fn same_seed_gives_same_embeddings() {
    let graph = disjoint_cliques(2, 3).unwrap();
    let structure = StructuralIndex::t_order(&graph, 2);
    let features = array_to_tensor(graph.features(), &Device::Cpu).unwrap();

    let a = encoder(graph.num_features(), 42).encode(&features, &structure).unwrap();
    let b = encoder(graph.num_features(), 42).encode(&features, &structure).unwrap();
    assert_eq!(
        a.embeddings.to_vec2::<f32>().unwrap(),
        b.embeddings.to_vec2::<f32>().unwrap()
    );
}

#[test]
fn zero_width_layer_is_rejected() {
    let config = GatEncoderConfig::new(4, 0, 2);
    assert!(GatEncoder::new(&config, Some(0), &Device::Cpu).is_err());
}

#[test]
fn 모든_매개변수에_그래디언트() {
    let graph = disjoint_cliques(2, 4).unwrap();
    let structure = StructuralIndex::t_order(&graph, 2);
    let features = array_to_tensor(graph.features(), &Device::Cpu).unwrap();
    let mut enc = encoder(graph.num_features(), 5);

    let encoded = enc.encode(&features, &structure).unwrap();
    let loss = enc.reconstruction_loss(&encoded.embeddings, graph.edges()).unwrap();
    let grads = loss.backward().unwrap();

    let vars = enc.trainable_vars();
    assert_eq!(vars.len(), 8);
    for var in &vars {
        assert!(grads.get(var.as_tensor()).is_some());
    }
}
