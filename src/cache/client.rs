//! Caching decorator over any [`RecmanApi`] implementation.

use super::backend::{CacheBackend, MemoryCache};
use super::key::CacheKey;
use super::manager::{CacheConfig, CacheManager, CacheStats};
use crate::client::{ApiResponse, Operation, RecmanApi, RecmanClient, RecmanClientBuilder};
use crate::transport::HttpClient;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Entries kept by the default in-memory backend.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1024;

/// Recman client that memoizes successful responses.
///
/// Every call derives a key from the operation name and its arguments. While
/// caching is enabled a stored response is returned without touching the
/// network. Otherwise the inner client is called and its response is written
/// back, also when reads are disabled, so the cache stays warm. Failed calls
/// are never cached and leave existing entries untouched.
///
/// Enabling and disabling produces a new client value; clones share the
/// backend, the inner client and the statistics.
pub struct CachedRecmanClient<A = RecmanClient> {
    inner: Arc<A>,
    cache: CacheManager,
}

impl<A> Clone for CachedRecmanClient<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cache: self.cache.clone(),
        }
    }
}

impl CachedRecmanClient<RecmanClient> {
    pub fn builder() -> CachedRecmanClientBuilder {
        CachedRecmanClientBuilder::new()
    }
}

impl<A: RecmanApi> CachedRecmanClient<A> {
    /// Wrap `inner` with the default cache configuration.
    pub fn new(inner: A, backend: Arc<dyn CacheBackend>) -> Self {
        Self::with_config(inner, backend, CacheConfig::default())
    }

    pub fn with_config(inner: A, backend: Arc<dyn CacheBackend>, config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: CacheManager::new(config, backend),
        }
    }

    /// Stop reading from the cache. Fresh responses are still stored.
    pub fn disable_cache(mut self) -> Self {
        self.cache = self.cache.with_enabled(false);
        self
    }

    pub fn enable_cache(mut self) -> Self {
        self.cache = self.cache.with_enabled(true);
        self
    }

    /// A copy of this client that bypasses cache reads; `self` is unchanged.
    pub fn with_cache_disabled(&self) -> Self {
        self.clone().disable_cache()
    }

    pub fn with_cache_enabled(&self) -> Self {
        self.clone().enable_cache()
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    pub fn cache_key(&self, operation: &Operation) -> CacheKey {
        self.cache.key_for(operation)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_config(&self) -> &CacheConfig {
        self.cache.config()
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: RecmanApi> RecmanApi for CachedRecmanClient<A> {
    async fn execute(&self, operation: &Operation) -> Result<ApiResponse> {
        let key = self.cache.key_for(operation);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        debug!(operation = operation.name(), key = %key, "fetching from Recman");
        let fresh = self.inner.execute(operation).await?;
        self.cache.set(&key, &fresh).await;
        Ok(fresh)
    }
}

/// Builder for a [`CachedRecmanClient`] over a [`RecmanClient`].
pub struct CachedRecmanClientBuilder {
    client: RecmanClientBuilder,
    backend: Option<Arc<dyn CacheBackend>>,
    config: CacheConfig,
}

impl CachedRecmanClientBuilder {
    pub fn new() -> Self {
        Self {
            client: RecmanClientBuilder::new(),
            backend: None,
            config: CacheConfig::default(),
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.client = self.client.api_key(api_key);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.base_url(url);
        self
    }

    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.client = self.client.http_client(http_client);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Inject the cache store. Defaults to a [`MemoryCache`] of [`DEFAULT_MEMORY_CAPACITY`] entries.
    pub fn cache_backend(mut self, backend: Arc<dyn CacheBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config = self.config.with_ttl(ttl);
        self
    }

    pub fn cache_without_expiry(mut self) -> Self {
        self.config = self.config.without_expiry();
        self
    }

    pub fn cache_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.with_key_prefix(prefix);
        self
    }

    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.config = self.config.with_enabled(enabled);
        self
    }

    pub fn build(self) -> Result<CachedRecmanClient> {
        let client = self.client.build()?;
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(MemoryCache::new(DEFAULT_MEMORY_CAPACITY)));
        Ok(CachedRecmanClient::with_config(client, backend, self.config))
    }
}

impl Default for CachedRecmanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
