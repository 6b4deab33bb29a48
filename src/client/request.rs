//! Query parameters for a single Recman API call.

use serde::Serialize;

/// Parameters the client always injects itself.
pub(crate) const RESERVED_PARAMS: [&str; 2] = ["key", "type"];

/// The `fields` parameter: either a list of field names or a preformatted string.
///
/// Both forms serialize to the same comma-separated value, so
/// `["a", "b", "c"]` and `"a,b,c"` are interchangeable on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Fields {
    List(Vec<String>),
    Raw(String),
}

impl Fields {
    pub fn to_query_value(&self) -> String {
        match self {
            Fields::List(names) => names.join(","),
            Fields::Raw(value) => value.clone(),
        }
    }
}

impl From<&[&str]> for Fields {
    fn from(names: &[&str]) -> Self {
        Fields::List(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for Fields {
    fn from(names: Vec<String>) -> Self {
        Fields::List(names)
    }
}

impl From<&str> for Fields {
    fn from(value: &str) -> Self {
        Fields::Raw(value.to_string())
    }
}

impl From<String> for Fields {
    fn from(value: String) -> Self {
        Fields::Raw(value)
    }
}

/// Ordered query parameters for one operation, excluding credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSpec {
    params: Vec<(String, String)>,
    fields: Option<Fields>,
}

impl RequestSpec {
    /// Start a request for the given `scope`.
    pub fn new(scope: &str) -> Self {
        Self::default().param("scope", scope)
    }

    /// Set a parameter, replacing an earlier value with the same name.
    ///
    /// A parameter named `fields` is routed to [`RequestSpec::fields`].
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        if name == "fields" {
            self.fields = Some(Fields::Raw(value));
            return self;
        }
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    pub fn fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn scope(&self) -> Option<&str> {
        self.get("scope")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_list(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Final query pairs: `key`, `type=json`, `fields` (when present), then the
    /// operation parameters. Caller-supplied `key`/`type` values are dropped.
    pub fn query_pairs<'a>(&'a self, api_key: &'a str) -> Vec<(&'a str, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 3);
        pairs.push(("key", api_key.to_string()));
        pairs.push(("type", "json".to_string()));
        if let Some(fields) = &self.fields {
            pairs.push(("fields", fields.to_query_value()));
        }
        pairs.extend(
            self.params
                .iter()
                .filter(|(name, _)| !RESERVED_PARAMS.contains(&name.as_str()))
                .map(|(name, value)| (name.as_str(), value.clone())),
        );
        pairs
    }
}
