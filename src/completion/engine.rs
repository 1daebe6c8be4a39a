//! Completion engine - orchestrates the completion flow.
//!
//! Tokenize, classify, plan, assemble. Tokenization and classification are
//! synchronous pure functions of the request; the single asynchronous
//! suspension point is the field-resolver call, and it only happens when the
//! classified context actually asks for fields. The engine is advisory: every
//! failure mode degrades to empty suggestions, it never errors and never
//! panics.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::syntax::catalog::{
    BOOLEAN_FUNCTIONS, DATETIME_FUNCTIONS, FIELD_AND_FILTER_FUNCTIONS, IP_FUNCTIONS,
    NUMERIC_OPERATORS, STATS_AGGREGATION_FUNCTIONS, STATS_NON_AGGREGATION_FUNCTIONS,
    STRING_FUNCTIONS,
};

use super::assemble::{command_group, fields_group, function_group, sort_order_group};
use super::command::{self, CommandPlan};
use super::context::{CompletionContext, classify};
use super::provider::FieldProvider;
use super::stream::TokenStream;
use super::types::{QueryContext, SuggestionGroup, TypeaheadOutput, TypeaheadRequest};

/// Main completion engine.
pub struct CompletionEngine {
    /// Source of resolvable field names.
    provider: Arc<dyn FieldProvider>,
}

impl CompletionEngine {
    /// Create a new completion engine around a field provider.
    pub fn new(provider: Arc<dyn FieldProvider>) -> Self {
        Self { provider }
    }

    /// Compute the suggestions for one request.
    ///
    /// Invoked on every keystroke; overlapping calls are independent and the
    /// caller is responsible for discarding stale responses.
    pub async fn provide_completions(&self, request: &TypeaheadRequest) -> TypeaheadOutput {
        let stream = TokenStream::from_text(&request.text);
        let context = classify(&stream, request.cursor_offset);
        debug!(?context, cursor = request.cursor_offset, "classified cursor");

        match context {
            CompletionContext::CommandStart => TypeaheadOutput {
                suggestions: vec![command_group()],
            },

            CompletionContext::FunctionArgument => TypeaheadOutput {
                suggestions: vec![self.resolve_fields(&request.context).await],
            },

            CompletionContext::AfterByKeyword => TypeaheadOutput {
                suggestions: vec![
                    self.resolve_fields(&request.context).await,
                    function_group(&[STRING_FUNCTIONS, DATETIME_FUNCTIONS, IP_FUNCTIONS]),
                ],
            },

            CompletionContext::AfterComparison => TypeaheadOutput {
                suggestions: vec![
                    self.resolve_fields(&request.context).await,
                    function_group(&[NUMERIC_OPERATORS, BOOLEAN_FUNCTIONS]),
                ],
            },

            CompletionContext::Command { command, cursor } => {
                self.command_completions(&stream, command, cursor, &request.context)
                    .await
            }

            CompletionContext::None => TypeaheadOutput::empty(),
        }
    }

    /// Materialize the governing command's suggestion plan.
    async fn command_completions(
        &self,
        stream: &TokenStream,
        command: usize,
        cursor: usize,
        context: &QueryContext,
    ) -> TypeaheadOutput {
        let plan = command::plan(stream, command, cursor);
        debug!(?plan, "command suggestion plan");

        match plan {
            CommandPlan::FieldsAndFunctions => TypeaheadOutput {
                suggestions: vec![
                    self.resolve_fields(context).await,
                    function_group(FIELD_AND_FILTER_FUNCTIONS),
                ],
            },
            CommandPlan::FieldsAndBooleanFunctions => TypeaheadOutput {
                suggestions: vec![
                    self.resolve_fields(context).await,
                    function_group(&[BOOLEAN_FUNCTIONS]),
                ],
            },
            CommandPlan::StatsFunctions { skip_filter } => {
                let mut group =
                    function_group(&[STATS_AGGREGATION_FUNCTIONS, STATS_NON_AGGREGATION_FUNCTIONS]);
                group.skip_filter = skip_filter;
                TypeaheadOutput {
                    suggestions: vec![group],
                }
            }
            CommandPlan::FieldsOnly => TypeaheadOutput {
                suggestions: vec![self.resolve_fields(context).await],
            },
            CommandPlan::SortOrder => TypeaheadOutput {
                suggestions: vec![sort_order_group()],
            },
            CommandPlan::Nothing => TypeaheadOutput::empty(),
        }
    }

    /// Resolve fields for the request scope. A resolver failure degrades to
    /// an empty Fields group; completion itself never fails.
    async fn resolve_fields(&self, context: &QueryContext) -> SuggestionGroup {
        match self
            .provider
            .fetch_fields(&context.log_groups, &context.region)
            .await
        {
            Ok(fields) => {
                debug!(count = fields.len(), "resolved fields");
                fields_group(fields)
            }
            Err(error) => {
                warn!(%error, "field resolution failed, degrading to empty field group");
                fields_group(Vec::new())
            }
        }
    }
}
