//! 전략 이름 → 구현 레지스트리
//!
//! 이름은 대소문자를 구분하지 않는다. 알 수 없는 이름은 치명적 설정 오류다.

use super::{
    BetweennessCentrality, CentroidStrategy, ClosenessCentrality, EigenvectorCentrality,
    FastGreedy, KCore, KMeansSeeds, PageRank, RandomSeeds, WeightedBetweennessCentrality,
    WeightedModularity,
};
use crate::error::{GaeError, Result};
use std::collections::BTreeMap;

/// 시드를 받아 전략 인스턴스를 만드는 생성 함수
pub type StrategyFactory = Box<dyn Fn(Option<u64>) -> Box<dyn CentroidStrategy>>;

struct Entry {
    name: String,
    factory: StrategyFactory,
}

pub struct CentroidRegistry {
    entries: BTreeMap<String, Entry>,
}

impl CentroidRegistry {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// 내장 전략이 모두 등록된 레지스트리
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("RandomSeeds", |seed| Box::new(RandomSeeds::new(seed)));
        registry.register("WeightedBetweennessCentrality", |_| {
            Box::new(WeightedBetweennessCentrality::default())
        });
        registry.register("BetweennessCentrality", |_| Box::new(BetweennessCentrality));
        registry.register("ClosenessCentrality", |_| Box::new(ClosenessCentrality));
        registry.register("EigenvectorCentrality", |_| {
            Box::new(EigenvectorCentrality::default())
        });
        registry.register("PageRank", |_| Box::new(PageRank::default()));
        registry.register("KCore", |_| Box::new(KCore));
        registry.register("KMeans", |seed| Box::new(KMeansSeeds::new(seed)));
        registry.register("FastGreedy", |_| Box::new(FastGreedy));
        registry.register("WeightedModularity", |_| Box::new(WeightedModularity::default()));
        registry
    }

    /// 전략 등록 (같은 이름은 덮어씀)
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(Option<u64>) -> Box<dyn CentroidStrategy> + 'static,
    {
        self.entries.insert(
            name.to_ascii_lowercase(),
            Entry { name: name.to_string(), factory: Box::new(factory) },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// 이름으로 전략 인스턴스 생성
    pub fn resolve(&self, name: &str, seed: Option<u64>) -> Result<Box<dyn CentroidStrategy>> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| (entry.factory)(seed))
            .ok_or_else(|| GaeError::UnknownStrategy(name.to_string()))
    }

    /// 등록된 전략 이름 (정렬)
    pub fn names(&self) -> Vec<&str> {
        self.entries.values().map(|e| e.name.as_str()).collect()
    }
}

impl Default for CentroidRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
