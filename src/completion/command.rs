//! Per-command suggestion strategies.
//!
//! Once the classifier has attributed the cursor to a command's argument
//! list, the command decides what to offer. The decision is a synchronous
//! pure function of the token stream producing a [`CommandPlan`]; the engine
//! materializes the plan, fetching fields only where a plan asks for them.

use crate::syntax::TokenType;

use super::stream::TokenStream;

/// The pipeline commands, keyed for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    Fields,
    Display,
    Filter,
    Stats,
    Sort,
    Limit,
    Parse,
}

impl QueryCommand {
    /// Parse a command token's content, case-insensitively.
    pub fn parse(content: &str) -> Option<Self> {
        match content.to_ascii_lowercase().as_str() {
            "fields" => Some(Self::Fields),
            "display" => Some(Self::Display),
            "filter" => Some(Self::Filter),
            "stats" => Some(Self::Stats),
            "sort" => Some(Self::Sort),
            "limit" => Some(Self::Limit),
            "parse" => Some(Self::Parse),
            _ => None,
        }
    }
}

/// What a command wants suggested at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPlan {
    /// Resolved fields plus the field/filter function catalog
    /// (`fields`, `display`).
    FieldsAndFunctions,
    /// Resolved fields plus boolean functions (`filter`, first argument).
    FieldsAndBooleanFunctions,
    /// The stats function catalog; `skip_filter` marks the positions where
    /// the UI shows the whole catalog unfiltered.
    StatsFunctions { skip_filter: bool },
    /// Resolved fields only (`sort`/`parse` first argument).
    FieldsOnly,
    /// The literal sort directions `asc` and `desc`.
    SortOrder,
    /// Nothing to suggest here.
    Nothing,
}

/// Decide what the command at `command` suggests for the cursor token at
/// `cursor`.
///
/// `sort` and `parse` position their arguments themselves; every other
/// command shares a gate: the cursor must be directly after the command
/// (through whitespace only) or be/directly follow a comma.
pub fn plan(stream: &TokenStream, command: usize, cursor: usize) -> CommandPlan {
    let Some(command_token) = stream.get(command) else {
        return CommandPlan::Nothing;
    };
    let Some(query_command) = QueryCommand::parse(&command_token.content) else {
        return CommandPlan::Nothing;
    };

    let prev = stream.prev_non_whitespace(cursor);
    let is_first_argument = prev == Some(command);

    if query_command == QueryCommand::Sort {
        if is_first_argument {
            return CommandPlan::FieldsOnly;
        }
        let prev_is_field = prev.is_some_and(|i| {
            stream
                .get(i)
                .is_some_and(|t| t.is_type(TokenType::FieldName))
        });
        if prev_is_field {
            return CommandPlan::SortOrder;
        }
        return CommandPlan::Nothing;
    }

    if query_command == QueryCommand::Parse && is_first_argument {
        return CommandPlan::FieldsOnly;
    }

    // Query consisting of exactly the command and trailing whitespace.
    let after_command_and_empty = stream
        .get(command + 1)
        .is_some_and(|t| t.is_type(TokenType::Whitespace))
        && stream.get(command + 2).is_none();
    let after_command =
        after_command_and_empty || stream.next_non_whitespace(command) == Some(cursor);

    let cursor_is_comma = stream
        .get(cursor)
        .is_some_and(|t| t.is(TokenType::Punctuation, ","));
    let comma_or_after_comma = cursor_is_comma
        || prev.is_some_and(|i| {
            stream
                .get(i)
                .is_some_and(|t| t.is(TokenType::Punctuation, ","))
        });

    // Suggestions only directly after the command or at a field separator.
    if !(after_command || comma_or_after_comma) {
        return CommandPlan::Nothing;
    }

    match query_command {
        QueryCommand::Fields | QueryCommand::Display => CommandPlan::FieldsAndFunctions,
        QueryCommand::Stats => CommandPlan::StatsFunctions {
            skip_filter: cursor_is_comma || after_command_and_empty,
        },
        QueryCommand::Filter if is_first_argument => CommandPlan::FieldsAndBooleanFunctions,
        _ => CommandPlan::Nothing,
    }
}
