//! Log Query Typeahead Library
//!
//! This library provides a context-aware autocomplete engine for a
//! pipe-delimited log query language (commands like `fields`, `filter`,
//! `stats`, `sort`, `parse` and `limit`, chained with `|`). Given query text
//! and a cursor offset it determines which completions are syntactically
//! valid at that exact position and returns them grouped for a typeahead UI.
//!
//! # Modules
//!
//! - `completion`: The completion engine, cursor classification and data contracts
//! - `error`: Error types and handling
//! - `syntax`: Tokenizer, grammar rules and the command/function catalogs
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use logsight::{CompletionEngine, QueryContext, StaticFieldProvider, TypeaheadRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Arc::new(StaticFieldProvider::new(["@timestamp", "@message"]));
//!     let engine = CompletionEngine::new(provider);
//!
//!     let request = TypeaheadRequest::new("stats count() | ", 16, QueryContext::default());
//!     let output = engine.provide_completions(&request).await;
//!
//!     for group in &output.suggestions {
//!         println!("{}: {} items", group.label, group.items.len());
//!     }
//! }
//! ```

pub mod completion;
pub mod error;
pub mod syntax;

// Re-export commonly used types
pub use completion::{
    CompletionEngine, CompletionItem, FieldProvider, LogGroup, QueryContext, StaticFieldProvider,
    SuggestionGroup, TypeaheadOutput, TypeaheadRequest,
};
pub use error::{LogsightError, Result};
pub use syntax::{Token, TokenType, tokenize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
