//! Plain data contracts between the engine and the surrounding editor.
//!
//! These types cross the process boundary as JSON (camelCase); the engine
//! itself only reads `text`, `cursor_offset` and the log-group scope.
//! `history` and `absolute_range` are carried for the editor and not
//! consulted during classification.

use serde::{Deserialize, Serialize};

use crate::syntax::CatalogEntry;

/// A log group scoping which fields are resolvable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    /// Log group name.
    pub name: String,
    /// Full resource identifier.
    pub arn: String,
}

/// Absolute time range of the query editor, epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteRange {
    pub from: i64,
    pub to: i64,
}

/// Read-only request context supplied by the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    /// Log groups the query runs against.
    #[serde(default)]
    pub log_groups: Vec<LogGroup>,

    /// Region the log groups live in.
    #[serde(default)]
    pub region: String,

    /// Previously executed query texts, newest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<String>,

    /// Time range currently selected in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_range: Option<AbsoluteRange>,
}

/// One completion request: query text, cursor position, scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeaheadRequest {
    /// Full query text.
    pub text: String,
    /// Cursor position as a byte offset into `text`.
    pub cursor_offset: usize,
    /// Scope and editor state.
    #[serde(default)]
    pub context: QueryContext,
}

impl TypeaheadRequest {
    /// Convenience constructor for the common case.
    pub fn new(text: impl Into<String>, cursor_offset: usize, context: QueryContext) -> Self {
        Self {
            text: text.into(),
            cursor_offset,
            context,
        }
    }
}

/// How the UI should match typed text against a group's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchFunctionType {
    /// Case-insensitive prefix match.
    Prefix,
    /// Fuzzy match; used for field names.
    Fuzzy,
}

/// One suggestion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Display label; also the inserted text unless `insert_text` is set.
    pub label: String,

    /// Call signature shown next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Longer description shown in the documentation panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Text to insert when it differs from the label (quoted field names).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}

impl CompletionItem {
    /// Item whose label is also its inserted text.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            documentation: None,
            insert_text: None,
        }
    }
}

impl From<&CatalogEntry> for CompletionItem {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            detail: entry.detail.map(str::to_string),
            documentation: entry.documentation.map(str::to_string),
            insert_text: None,
        }
    }
}

/// A labelled, ordered group of suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionGroup {
    /// Group heading shown in the typeahead dropdown.
    pub label: String,

    /// How the UI filters this group against typed text.
    pub search_function_type: SearchFunctionType,

    /// When set, the UI shows the group unfiltered at this position.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip_filter: bool,

    /// Candidates, in presentation order.
    pub items: Vec<CompletionItem>,
}

/// Everything offered at one cursor position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeaheadOutput {
    /// Suggestion groups, in presentation order.
    pub suggestions: Vec<SuggestionGroup>,
}

impl TypeaheadOutput {
    /// Output with no suggestions.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trips_as_camel_case_json() {
        let request = TypeaheadRequest::new(
            "fields @message",
            15,
            QueryContext {
                log_groups: vec![LogGroup {
                    name: "/app/prod".to_string(),
                    arn: "arn:aws:logs:us-east-1:123456789012:log-group:/app/prod".to_string(),
                }],
                region: "us-east-1".to_string(),
                history: vec![],
                absolute_range: Some(AbsoluteRange { from: 0, to: 60_000 }),
            },
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cursorOffset"], 15);
        assert_eq!(json["context"]["logGroups"][0]["name"], "/app/prod");
        assert_eq!(json["context"]["absoluteRange"]["to"], 60_000);

        let back: TypeaheadRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_context_defaults_when_fields_missing() {
        let context: QueryContext = serde_json::from_str("{}").unwrap();
        assert!(context.log_groups.is_empty());
        assert!(context.region.is_empty());
        assert!(context.history.is_empty());
        assert!(context.absolute_range.is_none());
    }

    #[test]
    fn test_group_serialization_skips_default_skip_filter() {
        let group = SuggestionGroup {
            label: "Fields".to_string(),
            search_function_type: SearchFunctionType::Fuzzy,
            skip_filter: false,
            items: vec![CompletionItem::from_label("@message")],
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["searchFunctionType"], "fuzzy");
        assert!(json.get("skipFilter").is_none());

        let group = SuggestionGroup {
            skip_filter: true,
            ..group
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["skipFilter"], true);
    }

    #[test]
    fn test_item_serialization_skips_absent_fields() {
        let item = CompletionItem::from_label("asc");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"label":"asc"}"#);
    }

    #[test]
    fn test_item_from_catalog_entry() {
        let entry = crate::syntax::catalog::QUERY_COMMANDS
            .iter()
            .find(|e| e.label == "stats")
            .unwrap();
        let item = CompletionItem::from(entry);
        assert_eq!(item.label, "stats");
        assert!(item.documentation.is_some());
        assert!(item.insert_text.is_none());
    }
}
