//! Completion system for the log query language
//!
//! This module provides a context-aware completion system for the
//! pipe-delimited query language. It is error-tolerant and works with
//! incomplete input, which makes it suitable for per-keystroke typeahead.
//!
//! # Architecture
//!
//! The completion system consists of several components:
//!
//! - **TokenStream**: flat token arena with cursor-aware navigation
//! - **Context**: precedence-ordered classification of the cursor position
//! - **Command**: per-command suggestion plans
//! - **Provider**: async boundary resolving field names for the query scope
//! - **Assemble**: turns catalogs and fields into labelled suggestion groups
//! - **Engine**: orchestrates the entire completion flow
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use logsight::completion::{
//!     CompletionEngine, QueryContext, StaticFieldProvider, TypeaheadRequest,
//! };
//!
//! # async fn run() {
//! let provider = Arc::new(StaticFieldProvider::new(["@timestamp", "@message"]));
//! let engine = CompletionEngine::new(provider);
//!
//! // Complete "fields " with the cursor at the end
//! let request = TypeaheadRequest::new("fields ", 7, QueryContext::default());
//! let output = engine.provide_completions(&request).await;
//! // output.suggestions: a Fields group and a Functions group
//! # }
//! ```

mod assemble;
mod command;
mod context;
mod engine;
mod provider;
mod stream;
mod types;

pub use engine::CompletionEngine;
pub use provider::{FieldProvider, StaticFieldProvider};
pub use types::{
    AbsoluteRange, CompletionItem, LogGroup, QueryContext, SearchFunctionType, SuggestionGroup,
    TypeaheadOutput, TypeaheadRequest,
};
