//! Cache manager.

use super::backend::CacheBackend;
use super::key::{CacheKey, CacheKeyGenerator, DEFAULT_KEY_PREFIX};
use crate::client::Operation;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Two hours, well inside Recman's daily request quota.
pub const DEFAULT_TTL: Duration = Duration::from_secs(7200);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// `None` stores entries without expiry.
    pub ttl: Option<Duration>,
    /// When false, reads are skipped but fresh responses are still written.
    pub enabled: bool,
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self { Self { ttl: Some(DEFAULT_TTL), enabled: true, key_prefix: DEFAULT_KEY_PREFIX.to_string() } }
}

impl CacheConfig {
    pub fn new() -> Self { Self::default() }
    pub fn with_ttl(mut self, ttl: Duration) -> Self { self.ttl = Some(ttl); self }
    pub fn without_expiry(mut self) -> Self { self.ttl = None; self }
    pub fn with_enabled(mut self, enabled: bool) -> Self { self.enabled = enabled; self }
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self { self.key_prefix = prefix.into(); self }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats { pub hits: u64, pub misses: u64, pub sets: u64, pub errors: u64 }

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 { let total = self.hits + self.misses; if total == 0 { 0.0 } else { self.hits as f64 / total as f64 } }
}

struct AtomicStats { hits: AtomicU64, misses: AtomicU64, sets: AtomicU64, errors: AtomicU64 }
impl AtomicStats {
    fn new() -> Self { Self { hits: AtomicU64::new(0), misses: AtomicU64::new(0), sets: AtomicU64::new(0), errors: AtomicU64::new(0) } }
    fn to_stats(&self) -> CacheStats { CacheStats { hits: self.hits.load(Ordering::Relaxed), misses: self.misses.load(Ordering::Relaxed), sets: self.sets.load(Ordering::Relaxed), errors: self.errors.load(Ordering::Relaxed) } }
}

/// Whether a fresh fetch is needed.
///
/// A disabled cache, a missing entry and an "empty" entry (`null`, `false`,
/// `0`, `""`, `[]`, `{}`) all force a refresh. Legitimately empty responses
/// are therefore refetched on every call.
pub fn should_refresh(enabled: bool, cached: Option<&Value>) -> bool {
    match cached {
        _ if !enabled => true,
        None => true,
        Some(value) => is_empty_value(value),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Reads and writes API responses through a [`CacheBackend`].
///
/// Backend failures are logged and counted, never returned: a failed read is
/// a miss and a failed write is dropped.
#[derive(Clone)]
pub struct CacheManager { config: CacheConfig, keys: CacheKeyGenerator, backend: Arc<dyn CacheBackend>, stats: Arc<AtomicStats> }

impl CacheManager {
    pub fn new(config: CacheConfig, backend: Arc<dyn CacheBackend>) -> Self {
        let keys = CacheKeyGenerator::new().with_prefix(config.key_prefix.clone());
        Self { config, keys, backend, stats: Arc::new(AtomicStats::new()) }
    }

    /// Same backend and counters, different enabled flag.
    pub fn with_enabled(&self, enabled: bool) -> Self {
        let mut manager = self.clone();
        manager.config.enabled = enabled;
        manager
    }

    pub fn key_for(&self, operation: &Operation) -> CacheKey { self.keys.for_operation(operation) }

    /// Cached response for `key`, or `None` when a refresh is needed.
    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        if !self.config.enabled { return None; }
        let cached = match self.backend.get(key).await {
            Ok(Some(data)) => match serde_json::from_slice::<Value>(&data) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.stats.errors.fetch_add(1, Ordering::Relaxed);
                    warn!(key = %key, error = %e, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, backend = self.backend.name(), error = %e, "cache read failed");
                None
            }
        };
        if should_refresh(self.config.enabled, cached.as_ref()) {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "cache miss");
            None
        } else {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "cache hit");
            cached
        }
    }

    /// Store `value` under `key` with the configured TTL, whether or not reads are enabled.
    pub async fn set(&self, key: &CacheKey, value: &Value) {
        let data = match serde_json::to_vec(value) {
            Ok(data) => data,
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, error = %e, "cannot encode response for cache");
                return;
            }
        };
        match self.backend.set(key, &data, self.config.ttl).await {
            Ok(()) => { self.stats.sets.fetch_add(1, Ordering::Relaxed); debug!(key = %key, "cached response"); }
            Err(e) => { self.stats.errors.fetch_add(1, Ordering::Relaxed); warn!(key = %key, backend = self.backend.name(), error = %e, "cache write failed"); }
        }
    }

    pub fn config(&self) -> &CacheConfig { &self.config }
    pub fn is_enabled(&self) -> bool { self.config.enabled }
    pub fn stats(&self) -> CacheStats { self.stats.to_stats() }
    pub fn backend_name(&self) -> &'static str { self.backend.name() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::{Error, Result};
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingCache;

    #[async_trait]
    impl CacheBackend for FailingCache {
        async fn get(&self, _: &CacheKey) -> Result<Option<Vec<u8>>> { Err(Error::Cache("down".into())) }
        async fn set(&self, _: &CacheKey, _: &[u8], _: Option<Duration>) -> Result<()> { Err(Error::Cache("down".into())) }
        async fn delete(&self, _: &CacheKey) -> Result<bool> { Ok(false) }
        async fn clear(&self) -> Result<()> { Ok(()) }
        async fn len(&self) -> Result<usize> { Ok(0) }
        fn name(&self) -> &'static str { "failing" }
    }

    #[test]
    fn test_should_refresh() {
        assert!(should_refresh(false, Some(&json!([1]))));
        assert!(should_refresh(true, None));
        assert!(!should_refresh(true, Some(&json!([1]))));
        assert!(!should_refresh(true, Some(&json!({"a": 1}))));
        for empty in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(should_refresh(true, Some(&empty)), "{empty} should force a refresh");
        }
    }

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Some(Duration::from_secs(7200)));
        assert!(config.enabled);
        assert_eq!(config.key_prefix, "recman");
        assert_eq!(CacheConfig::new().without_expiry().ttl, None);
    }

    #[tokio::test]
    async fn test_get_and_set_update_stats() {
        let manager = CacheManager::new(CacheConfig::default(), Arc::new(MemoryCache::new(16)));
        let key = manager.key_for(&Operation::SectorList);

        assert_eq!(manager.get(&key).await, None);
        manager.set(&key, &json!([{"name": "Private"}])).await;
        assert_eq!(manager.get(&key).await, Some(json!([{"name": "Private"}])));

        let stats = manager.stats();
        assert_eq!(stats, CacheStats { hits: 1, misses: 1, sets: 1, errors: 0 });
        assert_eq!(stats.hit_ratio(), 0.5);
    }

    #[tokio::test]
    async fn test_disabled_manager_skips_reads_but_writes() {
        let backend = Arc::new(MemoryCache::new(16));
        let manager = CacheManager::new(CacheConfig::default().with_enabled(false), backend.clone());
        let key = manager.key_for(&Operation::ExtentList);

        manager.set(&key, &json!([1])).await;
        assert_eq!(manager.get(&key).await, None);
        assert_eq!(backend.len().await.unwrap(), 1);
        assert_eq!(manager.with_enabled(true).get(&key).await, Some(json!([1])));
    }

    #[tokio::test]
    async fn test_backend_failures_are_swallowed() {
        let manager = CacheManager::new(CacheConfig::default(), Arc::new(FailingCache));
        let key = manager.key_for(&Operation::BranchList);

        manager.set(&key, &json!([1])).await;
        assert_eq!(manager.get(&key).await, None);
        assert_eq!(manager.stats().errors, 2);
        assert_eq!(manager.backend_name(), "failing");
    }

    #[tokio::test]
    async fn test_prefix_from_config() {
        let manager = CacheManager::new(CacheConfig::default().with_key_prefix("acme"), Arc::new(MemoryCache::new(1)));
        assert!(manager.key_for(&Operation::Corporation).as_str().starts_with("acme_get_corporation_"));
    }
}
