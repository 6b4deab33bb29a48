//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::cache::{CacheBackend, CacheConfig, CachedRecmanClient, MemoryCache};
pub use crate::client::{ApiResponse, LocationField, RecmanApi, RecmanClient, UserListFilter};
pub use crate::{Error, Result};
