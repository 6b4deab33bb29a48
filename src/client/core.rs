use super::api::RecmanApi;
use super::builder::RecmanClientBuilder;
use super::operation::Operation;
use super::request::RequestSpec;
use crate::transport::HttpClient;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Production endpoint of the Recman API.
pub const DEFAULT_BASE_URL: &str = "https://api.recman.no/v1.php";

/// Client for the Recman API.
///
/// Every operation is a single authenticated GET; nothing is cached here.
/// Recman allows a small number of requests per day, so most applications
/// want [`CachedRecmanClient`](crate::cache::CachedRecmanClient) on top.
#[derive(Clone)]
pub struct RecmanClient {
    pub(crate) http: Arc<dyn HttpClient>,
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
}

impl fmt::Debug for RecmanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecmanClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RecmanClient {
    pub fn builder() -> RecmanClientBuilder {
        RecmanClientBuilder::new()
    }

    /// Client for the production endpoint using the default reqwest transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        RecmanClientBuilder::new().api_key(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Full request URL, including the credential.
    pub fn build_url(&self, spec: &RequestSpec) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .extend_pairs(spec.query_pairs(&self.api_key));
        url
    }

    /// Send one request and return the decoded, error-checked payload.
    pub async fn perform_request(&self, spec: &RequestSpec) -> Result<Value> {
        let url = self.build_url(spec);
        debug!(
            scope = spec.scope().unwrap_or_default(),
            endpoint = self.base_url.as_str(),
            "sending Recman request"
        );

        let body = self.http.get(url.as_str()).await?;
        let data: Value = serde_json::from_str(&body)?;

        if let Err(err) = check_for_error(&data) {
            warn!(scope = spec.scope().unwrap_or_default(), error = %err, "Recman API returned an error");
            return Err(err);
        }

        Ok(data)
    }
}

#[async_trait]
impl RecmanApi for RecmanClient {
    async fn execute(&self, operation: &Operation) -> Result<Value> {
        self.perform_request(&operation.request()).await
    }
}

/// Fail with [`Error::Api`] if the payload carries an `error` entry.
///
/// The API reports either a single `{code, message}` object or a list of
/// them; for a list only the first element is used. A bare string is taken
/// as the message with code `0`.
pub(crate) fn check_for_error(data: &Value) -> Result<()> {
    match data.get("error") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(errors)) => Err(api_error(errors.first().unwrap_or(&Value::Null))),
        Some(error) => Err(api_error(error)),
    }
}

fn api_error(error: &Value) -> Error {
    if let Value::String(message) = error {
        return Error::Api {
            code: 0,
            message: message.clone(),
        };
    }
    let code = error
        .get("code")
        .and_then(|c| {
            c.as_i64()
                .or_else(|| c.as_f64().map(|f| f as i64))
                .or_else(|| c.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .unwrap_or(0);
    let message = match error.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    Error::Api { code, message }
}
