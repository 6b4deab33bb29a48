//! # Response Caching Module
//!
//! Recman allows only a small number of API requests per day (historically
//! 200). This module memoizes successful responses behind a pluggable store so
//! repeated lookups do not burn through that quota.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CachedRecmanClient`] | Caching decorator exposing the full [`RecmanApi`](crate::client::RecmanApi) surface |
//! | [`CacheManager`] | Reads/writes responses, applies TTL, tracks statistics |
//! | [`CacheConfig`] | TTL, key prefix and enabled flag |
//! | [`CacheBackend`] | Trait for injecting a cache store |
//! | [`MemoryCache`] | In-memory LRU store used by default |
//! | [`CacheKeyGenerator`] | Deterministic keys from operation name and arguments |
//!
//! ## Example
//!
//! ```rust,no_run
//! use recman::cache::{CachedRecmanClient, MemoryCache};
//! use recman::RecmanApi;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> recman::Result<()> {
//! let client = CachedRecmanClient::builder()
//!     .api_key("your-api-key")
//!     .cache_backend(Arc::new(MemoryCache::new(500)))
//!     .cache_ttl(Duration::from_secs(3600))
//!     .build()?;
//!
//! let branches = client.get_branch_list().await?;
//! // Served from the cache, no second request.
//! let again = client.get_branch_list().await?;
//! assert_eq!(branches, again);
//!
//! // Force a refresh; the result is written back for later calls.
//! let fresh = client.with_cache_disabled().get_branch_list().await?;
//! # let _ = fresh;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cache Key Generation
//!
//! Keys have the form `{prefix}_{operation}_{sha256(arguments)}`, where the
//! arguments are the call's positional arguments as a JSON array. Different
//! pages of the candidate list therefore never share an entry.

mod backend;
mod client;
mod key;
mod manager;

pub use backend::{CacheBackend, MemoryCache};
pub use client::{CachedRecmanClient, CachedRecmanClientBuilder, DEFAULT_MEMORY_CAPACITY};
pub use key::{CacheKey, CacheKeyGenerator, DEFAULT_KEY_PREFIX};
pub use manager::{should_refresh, CacheConfig, CacheManager, CacheStats, DEFAULT_TTL};
