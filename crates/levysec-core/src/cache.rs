//! Externally-injected feature cache capability
//!
//! The engine itself stays stateless; callers that want memoization inject
//! a cache keyed by (series identity, configuration hash). Two engines with
//! equal configurations share cache entries; any parameter change rotates
//! the key.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::engine::MultiScaleFeatureEngine;
use crate::features::FeatureVector;

/// Cache capability for previously-computed feature vectors.
///
/// Implementations must be safe for concurrent use; `get`/`put` take
/// `&self` so a shared cache can back parallel batch extraction.
pub trait FeatureCache: Send + Sync {
    fn get(&self, series_id: &str, config_hash: u64) -> Option<FeatureVector>;
    fn put(&self, series_id: &str, config_hash: u64, features: FeatureVector);
}

/// Reference in-memory implementation.
#[derive(Default)]
pub struct InMemoryFeatureCache {
    entries: RwLock<HashMap<(String, u64), FeatureVector>>,
}

impl InMemoryFeatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached vectors
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeatureCache for InMemoryFeatureCache {
    fn get(&self, series_id: &str, config_hash: u64) -> Option<FeatureVector> {
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(&(series_id.to_string(), config_hash))
            .cloned()
    }

    fn put(&self, series_id: &str, config_hash: u64, features: FeatureVector) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert((series_id.to_string(), config_hash), features);
    }
}

/// Engine wrapper that consults an injected cache before extracting.
pub struct CachedExtractor<C: FeatureCache> {
    engine: MultiScaleFeatureEngine,
    cache: C,
    config_hash: u64,
}

impl<C: FeatureCache> CachedExtractor<C> {
    pub fn new(engine: MultiScaleFeatureEngine, cache: C) -> Self {
        let config_hash = engine.config().config_hash();
        Self {
            engine,
            cache,
            config_hash,
        }
    }

    /// Extract with memoization on (series_id, configuration hash).
    pub fn extract(&self, series_id: &str, series: &[f64]) -> FeatureVector {
        if let Some(cached) = self.cache.get(series_id, self.config_hash) {
            return cached;
        }
        let features = self.engine.extract(series);
        self.cache
            .put(series_id, self.config_hash, features.clone());
        features
    }

    pub fn engine(&self) -> &MultiScaleFeatureEngine {
        &self.engine
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}
