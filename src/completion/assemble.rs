//! Suggestion-group assembly.
//!
//! Builders own the group labels and search semantics; the engine only
//! composes groups. Field labels that are not bare identifiers get a
//! backtick-quoted `insert_text` so accepting the suggestion yields valid
//! query syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::syntax::CatalogEntry;
use crate::syntax::catalog::QUERY_COMMANDS;

use super::types::{CompletionItem, SearchFunctionType, SuggestionGroup};

/// A field name the query language accepts without quoting.
static BARE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[_a-zA-Z][_.0-9a-zA-Z]*$").expect("identifier pattern"));

/// The command catalog group.
pub fn command_group() -> SuggestionGroup {
    SuggestionGroup {
        label: "Commands".to_string(),
        search_function_type: SearchFunctionType::Prefix,
        skip_filter: false,
        items: QUERY_COMMANDS.iter().map(CompletionItem::from).collect(),
    }
}

/// A `Functions` group flattening the given catalogs, in order.
pub fn function_group(catalogs: &[&[CatalogEntry]]) -> SuggestionGroup {
    SuggestionGroup {
        label: "Functions".to_string(),
        search_function_type: SearchFunctionType::Prefix,
        skip_filter: false,
        items: catalogs
            .iter()
            .flat_map(|catalog| catalog.iter().map(CompletionItem::from))
            .collect(),
    }
}

/// The literal sort directions.
pub fn sort_order_group() -> SuggestionGroup {
    SuggestionGroup {
        label: "Sort Order".to_string(),
        search_function_type: SearchFunctionType::Prefix,
        skip_filter: false,
        items: vec![
            CompletionItem::from_label("asc"),
            CompletionItem::from_label("desc"),
        ],
    }
}

/// The resolved-fields group. Labels failing the bare-identifier test insert
/// themselves backtick-quoted.
pub fn fields_group(fields: Vec<String>) -> SuggestionGroup {
    SuggestionGroup {
        label: "Fields".to_string(),
        search_function_type: SearchFunctionType::Fuzzy,
        skip_filter: false,
        items: fields
            .into_iter()
            .map(|field| {
                let insert_text =
                    (!BARE_IDENTIFIER.is_match(&field)).then(|| format!("`{field}`"));
                CompletionItem {
                    insert_text,
                    ..CompletionItem::from_label(field)
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::catalog::{BOOLEAN_FUNCTIONS, NUMERIC_OPERATORS};
    use crate::syntax::{TokenType, tokenize};

    #[test]
    fn test_command_group_lists_all_commands() {
        let group = command_group();
        assert_eq!(group.label, "Commands");
        assert_eq!(group.search_function_type, SearchFunctionType::Prefix);
        let labels: Vec<&str> = group.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            ["fields", "display", "filter", "stats", "sort", "limit", "parse"]
        );
    }

    #[test]
    fn test_function_group_flattens_in_order() {
        let group = function_group(&[NUMERIC_OPERATORS, BOOLEAN_FUNCTIONS]);
        assert_eq!(
            group.items.len(),
            NUMERIC_OPERATORS.len() + BOOLEAN_FUNCTIONS.len()
        );
        assert_eq!(group.items[0].label, "abs");
        assert_eq!(group.items[NUMERIC_OPERATORS.len()].label, "ispresent");
    }

    #[test]
    fn test_sort_order_group() {
        let labels: Vec<String> = sort_order_group()
            .items
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, ["asc", "desc"]);
    }

    #[test]
    fn test_fields_group_quotes_non_identifiers() {
        let group = fields_group(vec![
            "@message".to_string(),
            "requestId".to_string(),
            "my field".to_string(),
            "2xx.count".to_string(),
        ]);
        assert_eq!(group.search_function_type, SearchFunctionType::Fuzzy);
        assert_eq!(group.items[0].insert_text, None);
        assert_eq!(group.items[1].insert_text, None);
        assert_eq!(group.items[2].insert_text, Some("`my field`".to_string()));
        assert_eq!(group.items[3].insert_text, Some("`2xx.count`".to_string()));
    }

    #[test]
    fn test_accepted_field_insert_text_tokenizes_as_one_token() {
        // Accepting a quoted suggestion must extend the query by exactly one
        // well-formed token.
        let group = fields_group(vec!["my field".to_string()]);
        let insert = group.items[0].insert_text.clone().unwrap();
        let text = format!("fields {insert}");
        let tokens = tokenize(&text);
        let last = tokens.last().unwrap();
        assert_eq!(last.content, "`my field`");
        assert!(last.is_type(TokenType::String));
        assert!(!tokens.iter().any(|t| t.is_type(TokenType::Unknown)));
    }

    #[test]
    fn test_accepted_bare_label_tokenizes_as_field() {
        let group = fields_group(vec!["@ingestionTime".to_string()]);
        assert_eq!(group.items[0].insert_text, None);
        let text = format!("fields {}", group.items[0].label);
        let tokens = tokenize(&text);
        let last = tokens.last().unwrap();
        assert!(last.is_type(TokenType::FieldName));
        assert_eq!(last.content, "@ingestionTime");
    }
}
