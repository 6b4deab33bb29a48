use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Builder field or environment variable that caused the error (e.g., "api_key", "RECMAN_BASE_URL")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "http_transport")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Recman client.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument failed a pre-flight check. Raised before any request is sent.
    #[error("Invalid {argument}: '{value}' is not valid, only one of the following can be used: {}", .allowed.join(", "))]
    InvalidArgument {
        argument: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// The API answered with an `error` payload.
    #[error("Recman API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by a [`CacheBackend`](crate::cache::CacheBackend).
    /// The caching client logs these and carries on; API operations never return it.
    #[error("Cache backend error: {0}")]
    Cache(String),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error without context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Upstream error code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_lists_allowed_values() {
        let err = Error::InvalidArgument {
            argument: "location field",
            value: "planet".to_string(),
            allowed: vec!["city", "region"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid location field: 'planet' is not valid, only one of the following can be used: city, region"
        );
    }

    #[test]
    fn test_configuration_context_is_rendered() {
        let err = Error::configuration_with_context(
            "API key required",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("client_builder"),
        );
        let msg = err.to_string();
        assert!(msg.contains("API key required"));
        assert!(msg.contains("field: api_key"));
        assert!(msg.contains("source: client_builder"));
        assert_eq!(
            err.context().and_then(|c| c.source.as_deref()),
            Some("client_builder")
        );
    }

    #[test]
    fn test_api_code() {
        let err = Error::Api {
            code: 7,
            message: "bad".to_string(),
        };
        assert_eq!(err.api_code(), Some(7));
        assert_eq!(err.to_string(), "Recman API error 7: bad");
        assert_eq!(Error::configuration("x").api_code(), None);
    }
}
