//! Field resolution boundary.
//!
//! Field names come from an external source (the log service behind the
//! selected log groups); the engine only consumes this trait. It is invoked
//! at most once per completion request and performs no caching or
//! deduplication — callers that want memoization layer it outside.

use async_trait::async_trait;

use crate::error::Result;

use super::types::LogGroup;

/// Asynchronous source of resolvable field names.
#[async_trait]
pub trait FieldProvider: Send + Sync {
    /// Fetch the field names discoverable in the given log groups.
    ///
    /// # Arguments
    /// * `log_groups` - Log groups the query runs against
    /// * `region` - Region the log groups live in
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Field names, in presentation order
    async fn fetch_fields(&self, log_groups: &[LogGroup], region: &str) -> Result<Vec<String>>;
}

/// Fixed-list provider for embedding and tests; resolves the same fields
/// regardless of scope.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldProvider {
    fields: Vec<String>,
}

impl StaticFieldProvider {
    /// Create a provider resolving exactly `fields`.
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl FieldProvider for StaticFieldProvider {
    async fn fetch_fields(&self, _log_groups: &[LogGroup], _region: &str) -> Result<Vec<String>> {
        Ok(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_fields_in_order() {
        let provider = StaticFieldProvider::new(["@timestamp", "@message", "level"]);
        let fields = provider.fetch_fields(&[], "us-east-1").await.unwrap();
        assert_eq!(fields, ["@timestamp", "@message", "level"]);
    }

    #[tokio::test]
    async fn test_static_provider_ignores_scope() {
        let provider = StaticFieldProvider::new(["a"]);
        let groups = vec![LogGroup {
            name: "/app/prod".to_string(),
            arn: "arn:aws:logs:eu-west-1:123456789012:log-group:/app/prod".to_string(),
        }];
        let fields = provider.fetch_fields(&groups, "eu-west-1").await.unwrap();
        assert_eq!(fields, ["a"]);
    }
}
