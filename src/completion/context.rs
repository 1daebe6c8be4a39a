//! Cursor context classification.
//!
//! Determines the syntactic situation at the cursor as a plain enum; the
//! checks run in a fixed precedence order and the first match wins, which is
//! what makes classification deterministic on ambiguous input. Classification
//! is a synchronous pure function of the token stream and the cursor offset.

use crate::syntax::{TokenType, catalog};

use super::stream::{Exclude, TokenStream};

/// The syntactic situation at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    /// At the start of the query or right after a command separator;
    /// complete the command catalog.
    CommandStart,

    /// Inside the parentheses of a function that accepts a field argument;
    /// complete field names.
    FunctionArgument,

    /// Right after the `by` keyword (or a comma in its argument list);
    /// complete fields and grouping-compatible functions.
    AfterByKeyword,

    /// Right after a comparison operator; complete fields and functions
    /// usable in a condition.
    AfterComparison,

    /// Somewhere in a command's argument list; the command token decides
    /// what to complete.
    Command {
        /// Index of the governing command token.
        command: usize,
        /// Index of the cursor token.
        cursor: usize,
    },

    /// No completion available.
    None,
}

/// Classify the cursor position. Checks run in precedence order; the first
/// match wins.
pub fn classify(stream: &TokenStream, cursor_offset: usize) -> CompletionContext {
    // An empty query is the start of its first command.
    if stream.is_empty() {
        return CompletionContext::CommandStart;
    }

    // Out-of-range cursor: degrade instead of indexing out of bounds.
    let Some(cursor) = stream.token_at_offset(cursor_offset) else {
        return CompletionContext::None;
    };

    let prev = stream.prev_non_whitespace(cursor);

    let is_command_start = cursor == 0
        || prev.is_some_and(|i| {
            stream
                .get(i)
                .is_some_and(|t| t.is_type(TokenType::CommandSeparator))
        });
    if is_command_start {
        return CompletionContext::CommandStart;
    }

    if inside_function_parenthesis(stream, cursor) {
        return CompletionContext::FunctionArgument;
    }

    if after_by_keyword(stream, cursor) {
        return CompletionContext::AfterByKeyword;
    }

    let after_comparison = prev.is_some_and(|i| {
        stream
            .get(i)
            .is_some_and(|t| t.is_type(TokenType::ComparisonOperator))
    });
    if after_comparison {
        return CompletionContext::AfterComparison;
    }

    if let Some(command) = stream.previous_command_token(cursor) {
        return CompletionContext::Command { command, cursor };
    }

    CompletionContext::None
}

/// True when the cursor sits inside `func(...)` for a function that takes a
/// field argument: the cursor token or its non-whitespace predecessor is the
/// opening parenthesis, and walking back from that parenthesis lands on an
/// allow-listed function token.
fn inside_function_parenthesis(stream: &TokenStream, cursor: usize) -> bool {
    let prev = stream.prev_non_whitespace(cursor);

    let paren = if stream.get(cursor).is_some_and(|t| t.content == "(") {
        Some(cursor)
    } else {
        prev.filter(|&i| stream.get(i).is_some_and(|t| t.content == "("))
    };

    let Some(paren) = paren else {
        return false;
    };

    stream
        .prev_non_whitespace(paren)
        .and_then(|i| stream.get(i))
        .is_some_and(|token| {
            token.is_type(TokenType::Function) && catalog::accepts_field_argument(&token.content)
        })
}

/// True when the nearest semantic anchor behind the cursor is the `by`
/// keyword and the cursor is positioned to extend its argument list: either
/// directly after `by` (through whitespace) or after a comma.
fn after_by_keyword(stream: &TokenStream, cursor: usize) -> bool {
    const ANCHOR_EXCLUDES: &[Exclude] = &[
        Exclude::Type(TokenType::Whitespace),
        Exclude::Type(TokenType::Function),
        Exclude::Type(TokenType::Punctuation),
        Exclude::Type(TokenType::FieldName),
        Exclude::Type(TokenType::Number),
    ];

    let Some(anchor) = stream.previous_excluding(cursor, ANCHOR_EXCLUDES) else {
        return false;
    };
    if !stream
        .get(anchor)
        .is_some_and(|t| t.is(TokenType::Keyword, "by"))
    {
        return false;
    }

    let Some(prev) = stream.previous_excluding(cursor, &[Exclude::Type(TokenType::Whitespace)])
    else {
        return false;
    };
    prev == anchor
        || stream
            .get(prev)
            .is_some_and(|t| t.is(TokenType::Punctuation, ","))
}
