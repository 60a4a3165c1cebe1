//! In-memory result cache with optional file persistence.

use dashmap::DashMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use crate::cache::store::{CacheResult, ResultCache};
use crate::observability::metrics;

/// A thread-safe cache of serialized results.
///
/// Clones share the same map. Entries never expire.
#[derive(Clone, Default)]
pub struct MemoryCache {
    inner: Arc<DashMap<String, Value>>,
    persistence_path: Option<String>,
}

impl MemoryCache {
    /// Create a new empty cache.
    pub fn new(persistence_path: Option<String>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            persistence_path,
        }
    }

    /// Load from file if it exists, otherwise start empty.
    pub fn load_from_file(path: &str) -> CacheResult<Self> {
        let cache = Self::new(Some(path.to_string()));
        if Path::new(path).exists() {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let map: HashMap<String, Value> = serde_json::from_reader(reader)?;

            for (k, v) in map {
                cache.inner.insert(k, v);
            }
            metrics::record_cache_size(cache.inner.len());
            tracing::info!(path, entries = cache.inner.len(), "Loaded result cache from file");
        }
        Ok(cache)
    }

    /// Save to the persistence path, if one is set.
    pub fn save_to_file(&self) -> CacheResult<()> {
        if let Some(path) = &self.persistence_path {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);

            let map: HashMap<_, _> = self
                .inner
                .iter()
                .map(|r| (r.key().clone(), r.value().clone()))
                .collect();

            serde_json::to_writer(writer, &map)?;
            tracing::info!(path = %path, entries = map.len(), "Saved result cache to file");
        }
        Ok(())
    }

    pub fn persistence_path(&self) -> Option<&str> {
        self.persistence_path.as_deref()
    }

    /// Remove a single entry.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let removed = self.inner.remove(key).map(|(_, v)| v);
        metrics::record_cache_size(self.inner.len());
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.clear();
        metrics::record_cache_size(0);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ResultCache for MemoryCache {
    fn try_get(&self, key: &str) -> Option<Value> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    fn set(&self, key: &str, value: Value) {
        self.inner.insert(key.to_string(), value);
        metrics::record_cache_size(self.inner.len());
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.inner.len())
            .field("persistence_path", &self.persistence_path)
            .finish()
    }
}
