//! Mock Recman endpoint for integration tests

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use recman::cache::{CacheConfig, CachedRecmanClient, MemoryCache};
use recman::RecmanClient;
use std::sync::Arc;

pub const API_KEY: &str = "integration-key";
pub const ENDPOINT_PATH: &str = "/v1.php";

/// Test fixture that manages a mock server
pub struct MockRecmanServer {
    pub server: ServerGuard,
    pub endpoint: String,
}

impl MockRecmanServer {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let endpoint = format!("{}{}", server.url(), ENDPOINT_PATH);
        Self { server, endpoint }
    }

    /// Base client pointed at the mock endpoint
    pub fn client(&self) -> RecmanClient {
        RecmanClient::builder()
            .api_key(API_KEY)
            .base_url(&self.endpoint)
            .build()
            .expect("Failed to build client")
    }

    /// Caching client over a fresh in-memory store
    pub fn cached_client(&self) -> CachedRecmanClient {
        CachedRecmanClient::with_config(
            self.client(),
            Arc::new(MemoryCache::new(128)),
            CacheConfig::default(),
        )
    }

    /// Credentials every request must carry, plus `extra`
    pub fn query(extra: &[(&str, &str)]) -> Matcher {
        let mut matchers = vec![
            Matcher::UrlEncoded("key".into(), API_KEY.into()),
            Matcher::UrlEncoded("type".into(), "json".into()),
        ];
        matchers.extend(
            extra
                .iter()
                .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string())),
        );
        Matcher::AllOf(matchers)
    }

    /// Create a mock for a successful JSON response
    pub async fn mock_json(&mut self, extra: &[(&str, &str)], body: &str, hits: usize) -> Mock {
        self.mock_response(extra, 200, body, hits).await
    }

    pub async fn mock_response(
        &mut self,
        extra: &[(&str, &str)],
        status: usize,
        body: &str,
        hits: usize,
    ) -> Mock {
        self.server
            .mock("GET", ENDPOINT_PATH)
            .match_query(Self::query(extra))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// A mock that must never be hit
    pub async fn forbid_requests(&mut self) -> Mock {
        self.server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}
