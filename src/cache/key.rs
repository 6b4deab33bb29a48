//! Cache key generation.

use crate::client::Operation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Namespace prepended to every key unless configured otherwise.
pub const DEFAULT_KEY_PREFIX: &str = "recman";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub key: String,
    pub operation: Option<String>,
    pub argument_hash: Option<String>,
}

impl CacheKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), operation: None, argument_hash: None }
    }
    pub fn with_operation(mut self, op: impl Into<String>) -> Self { self.operation = Some(op.into()); self }
    pub fn with_argument_hash(mut self, hash: impl Into<String>) -> Self { self.argument_hash = Some(hash.into()); self }
    pub fn as_str(&self) -> &str { &self.key }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.key) }
}

impl From<&str> for CacheKey { fn from(s: &str) -> Self { Self::new(s) } }
impl From<String> for CacheKey { fn from(s: String) -> Self { Self::new(s) } }

/// Derives `{prefix}_{operation}_{sha256(arguments)}` keys.
///
/// Arguments are hashed as a JSON array, so position matters: the same values
/// in the same order always produce the same key.
#[derive(Debug, Clone)]
pub struct CacheKeyGenerator {
    prefix: String,
}

impl CacheKeyGenerator {
    pub fn new() -> Self { Self { prefix: DEFAULT_KEY_PREFIX.to_string() } }
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self { self.prefix = prefix.into(); self }
    pub fn prefix(&self) -> &str { &self.prefix }

    pub fn generate(&self, operation: &str, arguments: &Value) -> CacheKey {
        let canonical = arguments.to_string();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect();
        CacheKey::new(format!("{}_{}_{}", self.prefix, operation, hash))
            .with_operation(operation)
            .with_argument_hash(hash)
    }

    pub fn for_operation(&self, operation: &Operation) -> CacheKey {
        self.generate(operation.name(), &operation.arguments())
    }
}

impl Default for CacheKeyGenerator { fn default() -> Self { Self::new() } }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{LocationField, UserListFilter};
    use serde_json::json;

    #[test]
    fn test_key_layout() {
        let key = CacheKeyGenerator::new().for_operation(&Operation::BranchList);
        let hash = key.argument_hash.clone().unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(key.as_str(), format!("recman_get_branch_list_{}", hash));
        assert_eq!(key.operation.as_deref(), Some("get_branch_list"));
    }

    #[test]
    fn test_same_arguments_same_key() {
        let keys = CacheKeyGenerator::new();
        let a = keys.for_operation(&Operation::candidate_list(Some(4)));
        let b = keys.for_operation(&Operation::candidate_list(Some(4)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pages_get_distinct_keys() {
        let keys = CacheKeyGenerator::new();
        let page1 = keys.for_operation(&Operation::candidate_list(Some(1)));
        let page2 = keys.for_operation(&Operation::candidate_list(Some(2)));
        assert_ne!(page1.key, page2.key);
    }

    #[test]
    fn test_argument_order_matters() {
        let keys = CacheKeyGenerator::new();
        let departments = Operation::UserList(UserListFilter::new().with_department_ids([1]));
        let corporations = Operation::UserList(UserListFilter::new().with_corporation_ids([1]));
        assert_ne!(keys.for_operation(&departments), keys.for_operation(&corporations));
        assert_ne!(keys.generate("op", &json!([1, 2])), keys.generate("op", &json!([2, 1])));
    }

    #[test]
    fn test_operation_name_is_part_of_key() {
        let keys = CacheKeyGenerator::new();
        assert_ne!(
            keys.for_operation(&Operation::BranchList),
            keys.for_operation(&Operation::SectorList)
        );
        assert_ne!(
            keys.for_operation(&Operation::LocationList(LocationField::City)),
            keys.for_operation(&Operation::LocationList(LocationField::Region))
        );
    }

    #[test]
    fn test_custom_prefix() {
        let key = CacheKeyGenerator::new().with_prefix("tenant42").for_operation(&Operation::UserTagList);
        assert!(key.as_str().starts_with("tenant42_get_user_tag_list_"));
    }
}
