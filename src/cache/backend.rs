//! Cache backend implementations.

use super::key::CacheKey;
use crate::Result;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            data,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }
    fn is_expired(&self) -> bool {
        self.expires_at.map_or(false, |at| Instant::now() >= at)
    }
}

/// Key/value store the caching client writes responses into.
///
/// `ttl` of `None` means the entry never expires. Expiry is entirely the
/// backend's job; the client never evicts anything itself.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>>;
    async fn set(&self, key: &CacheKey, value: &[u8], ttl: Option<Duration>) -> Result<()>;
    async fn delete(&self, key: &CacheKey) -> Result<bool>;
    async fn clear(&self) -> Result<()>;
    async fn len(&self) -> Result<usize>;
    fn name(&self) -> &'static str;
}

/// Bounded in-process LRU store.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>> {
        let mut entries = self.lock();
        match entries.get(key.as_str()) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.data.clone())),
            Some(_) => {}
            None => return Ok(None),
        }
        entries.pop(key.as_str());
        Ok(None)
    }
    async fn set(&self, key: &CacheKey, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        self.lock()
            .put(key.key.clone(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
    async fn delete(&self, key: &CacheKey) -> Result<bool> {
        Ok(self.lock().pop(key.as_str()).is_some())
    }
    async fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
    async fn len(&self) -> Result<usize> {
        Ok(self
            .lock()
            .iter()
            .filter(|(_, e)| !e.is_expired())
            .count())
    }
    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new(8);
        let key = CacheKey::new("a");
        cache.set(&key, b"[1]", Some(Duration::from_secs(60))).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"[1]".to_vec()));
        assert_eq!(cache.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let cache = MemoryCache::new(8);
        let key = CacheKey::new("a");
        cache.set(&key, b"[1]", Some(Duration::ZERO)).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), None);
        assert!(!cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_no_ttl_never_expires() {
        let cache = MemoryCache::new(8);
        let key = CacheKey::new("forever");
        cache.set(&key, b"{}", None).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let cache = MemoryCache::new(2);
        let (a, b, c) = (CacheKey::new("a"), CacheKey::new("b"), CacheKey::new("c"));
        cache.set(&a, b"1", None).await.unwrap();
        cache.set(&b, b"2", None).await.unwrap();
        cache.get(&a).await.unwrap();
        cache.set(&c, b"3", None).await.unwrap();

        assert!(cache.get(&a).await.unwrap().is_some());
        assert!(cache.get(&b).await.unwrap().is_none());
        assert!(cache.get(&c).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let cache = MemoryCache::new(0);
        let key = CacheKey::new("a");
        cache.set(&key, b"1", None).await.unwrap();
        assert!(cache.delete(&key).await.unwrap());
        cache.set(&key, b"1", None).await.unwrap();
        cache.clear().await.unwrap();
        assert_eq!(cache.len().await.unwrap(), 0);
        assert_eq!(cache.name(), "memory");
    }
}
