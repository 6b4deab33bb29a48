use super::core::{RecmanClient, DEFAULT_BASE_URL};
use crate::transport::{HttpClient, ReqwestHttpClient};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for [`RecmanClient`].
///
/// Falls back to the environment for values that were not set explicitly:
/// - `RECMAN_API_KEY`
/// - `RECMAN_BASE_URL` (default `https://api.recman.no/v1.php`)
pub struct RecmanClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http_client: Option<Arc<dyn HttpClient>>,
    timeout: Option<Duration>,
}

impl RecmanClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            http_client: None,
            timeout: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API endpoint (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Inject the HTTP collaborator. Defaults to [`ReqwestHttpClient`].
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Request timeout for the default transport. Ignored when an HTTP client is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RecmanClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("RECMAN_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required (RECMAN_API_KEY)",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("client_builder"),
                )
            })?;

        let base_url = self
            .base_url
            .or_else(|| std::env::var("RECMAN_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone())
                    .with_source("client_builder"),
            )
        })?;

        let http: Arc<dyn HttpClient> = match (self.http_client, self.timeout) {
            (Some(http), _) => http,
            (None, Some(timeout)) => Arc::new(ReqwestHttpClient::with_timeout(timeout)?),
            (None, None) => Arc::new(ReqwestHttpClient::new()?),
        };

        Ok(RecmanClient {
            http,
            base_url,
            api_key,
        })
    }
}

impl Default for RecmanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_are_used() {
        let client = RecmanClientBuilder::new()
            .api_key("abc")
            .base_url("http://localhost:1234/v1.php")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/v1.php");
        assert_eq!(client.api_key, "abc");
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let err = RecmanClientBuilder::new().api_key("  ").build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("api_key")
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = RecmanClientBuilder::new()
            .api_key("abc")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("base_url")
        );
    }
}
