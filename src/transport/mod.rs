//! HTTP transport used by [`RecmanClient`](crate::client::RecmanClient).
//!
//! The client only ever needs "GET this URL and hand me the body", so the
//! collaborator is a single-method trait. [`ReqwestHttpClient`] is the default
//! implementation; tests and embedders can supply their own.

mod http;

pub use http::ReqwestHttpClient;

use async_trait::async_trait;

/// Minimal HTTP client the Recman client depends on.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the full response body.
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
}
