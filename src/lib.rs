//! # recman-rs
//!
//! Async client for the [Recman](https://help.recman.no/no/help/api/) recruitment API,
//! with optional response caching to stay within Recman's daily request quota.
//!
//! ## Overview
//!
//! - [`RecmanClient`] turns each named operation into one authenticated GET
//!   against `https://api.recman.no/v1.php`, decodes the JSON body and fails with
//!   [`Error::Api`] when the API reports an error.
//! - [`CachedRecmanClient`](cache::CachedRecmanClient) wraps any [`RecmanApi`]
//!   and memoizes successful responses in a pluggable [`CacheBackend`](cache::CacheBackend).
//!
//! Both the HTTP client and the cache store are injected collaborators; reqwest
//! and an in-memory LRU store are used when nothing else is configured.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recman::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> recman::Result<()> {
//!     let client = CachedRecmanClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let cities = client.get_location_list("city").await?;
//!     let first_page = client.get_candidate_list(None).await?;
//!     let second_page = client.get_candidate_list(Some(2)).await?;
//!     # let _ = (cities, first_page, second_page);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Base client, operations and request building |
//! | [`cache`] | Caching decorator, key generation and cache stores |
//! | [`transport`] | HTTP collaborator trait and reqwest implementation |
//! | [`error`] | Error taxonomy |

pub mod cache;
pub mod client;
pub mod error;
pub mod prelude;
pub mod transport;

// Re-export main types for convenience
pub use cache::CachedRecmanClient;
pub use client::{ApiResponse, Operation, RecmanApi, RecmanClient, RecmanClientBuilder};
pub use error::{Error, ErrorContext};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
