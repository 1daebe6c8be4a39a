//! Error-tolerant tokenizer for the log query language.
//!
//! The tokenizer is built for autocomplete scenarios and follows the same
//! contract as every lexer in this family:
//!
//! - **Never panic** - always return a valid token stream
//! - **Never reject input** - unmatched characters become `Unknown` tokens
//! - **Cover everything** - every byte of the input belongs to exactly one token
//!
//! Classification is driven by the ordered rules in [`super::grammar`]; the
//! first rule matching at the scan position wins.

use super::grammar::GRAMMAR;
use super::token::{Token, TokenType};

/// Tokenize the entire input.
///
/// Concatenating the contents of the returned tokens in order reconstructs
/// `text` exactly. When no rule matches, a single-character [`TokenType::Unknown`]
/// token is emitted so the scan always advances.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        if let Some((rule, len)) = GRAMMAR
            .iter()
            .find_map(|rule| rule.match_at(text, pos).map(|len| (rule, len)))
            .filter(|&(_, len)| len > 0)
        {
            let mut types = vec![rule.token_type];
            if let Some(alias) = rule.alias {
                types.push(alias);
            }
            tokens.push(Token::new(&text[pos..pos + len], types, pos, pos + len));
            pos += len;
        } else {
            // Progress guarantee: consume one character (not one byte, so a
            // multi-byte character is never split across tokens).
            let len = text[pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            tokens.push(Token::new(
                &text[pos..pos + len],
                vec![TokenType::Unknown],
                pos,
                pos + len,
            ));
            pos += len;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types_of(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|t| t.types[0]).collect()
    }

    fn reconstruct(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.content.as_str()).collect()
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_simple_pipeline() {
        let tokens = tokenize("fields @message | sort @timestamp desc");
        assert_eq!(tokens[0].content, "fields");
        assert!(tokens[0].is_type(TokenType::QueryCommand));
        assert!(tokens[0].is_type(TokenType::Function)); // alias
        assert_eq!(tokens[2].content, "@message");
        assert!(tokens[2].is_type(TokenType::FieldName));
        let pipe = tokens.iter().find(|t| t.content == "|").unwrap();
        assert!(pipe.is_type(TokenType::CommandSeparator));
        assert!(pipe.is_type(TokenType::Punctuation));
    }

    #[test]
    fn test_commands_match_case_insensitively() {
        let tokens = tokenize("FILTER x");
        assert!(tokens[0].is_type(TokenType::QueryCommand));
        assert_eq!(tokens[0].content, "FILTER");
    }

    #[test]
    fn test_quoted_strings_win_over_field_names() {
        let tokens = tokenize("filter msg like \"some text\"");
        let string = tokens.iter().find(|t| t.is_type(TokenType::String)).unwrap();
        assert_eq!(string.content, "\"some text\"");

        let tokens = tokenize("fields `weird field`");
        let string = tokens.iter().find(|t| t.is_type(TokenType::String)).unwrap();
        assert_eq!(string.content, "`weird field`");
    }

    #[test]
    fn test_keyword_only_when_whitespace_bounded() {
        let tokens = tokenize("stats count(x) by bucket ");
        let by = tokens.iter().find(|t| t.content == "by").unwrap();
        assert!(by.is_type(TokenType::Keyword));

        // trailing "by" with nothing after it is still a field name
        let tokens = tokenize("stats count(x) by");
        let by = tokens.iter().find(|t| t.content == "by").unwrap();
        assert!(by.is_type(TokenType::FieldName));
    }

    #[test]
    fn test_regex_literal_vs_division() {
        let tokens = tokenize("parse @message /(?<ip>\\S+)/| fields ip");
        let regex = tokens.iter().find(|t| t.is_type(TokenType::Regex)).unwrap();
        assert_eq!(regex.content, "/(?<ip>\\S+)/");

        // a lone slash in an expression is no regex; it degrades to Unknown
        let tokens = tokenize("fields bytes/1024");
        assert!(tokens.iter().any(|t| t.is(TokenType::Unknown, "/")));
        assert!(!tokens.iter().any(|t| t.is_type(TokenType::Regex)));
    }

    #[test]
    fn test_comment_line() {
        let tokens = tokenize("# fields are ignored here");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_type(TokenType::Comment));
    }

    #[test]
    fn test_functions_and_numbers() {
        let tokens = tokenize("filter strlen(name) >= 10");
        assert!(tokens.iter().any(|t| t.is(TokenType::Function, "strlen")));
        assert!(
            tokens
                .iter()
                .any(|t| t.is(TokenType::ComparisonOperator, ">="))
        );
        assert!(tokens.iter().any(|t| t.is(TokenType::Number, "10")));
    }

    #[test]
    fn test_lossless_reconstruction() {
        let inputs = [
            "",
            "fields @timestamp, @message | filter level = \"error\" | limit 20",
            "stats count(*) by bin(5m)",
            "parse @message \"user=*\" as user | sort user asc ",
            "# comment\nfields x",
            "weird ~~ §§ input // here",
            "fields résumé_count",
        ];
        for input in inputs {
            assert_eq!(reconstruct(&tokenize(input)), input, "input {input:?}");
        }
    }

    #[test]
    fn test_offsets_are_contiguous_and_cover_input() {
        let input = "stats avg(bytes) by bin(1h) | sort @timestamp desc";
        let tokens = tokenize(input);
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.start, expected_start);
            assert!(token.end > token.start);
            assert_eq!(&input[token.start..token.end], token.content);
            expected_start = token.end;
        }
        assert_eq!(expected_start, input.len());
    }

    #[test]
    fn test_every_offset_resolves_to_exactly_one_token_interval() {
        let input = "filter a >= 1 | fields b";
        let tokens = tokenize(input);
        for offset in 0..input.len() {
            let covering = tokens
                .iter()
                .filter(|t| t.start <= offset && offset < t.end)
                .count();
            assert_eq!(covering, 1, "offset {offset}");
        }
    }

    #[test]
    fn test_unknown_tokens_advance_one_char() {
        let tokens = tokenize("€");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_type(TokenType::Unknown));
        assert_eq!(tokens[0].content, "€");
    }

    #[test]
    fn test_types_in_mixed_query() {
        let tokens = tokenize("stats count(x) by y");
        assert_eq!(
            types_of(&tokens),
            vec![
                TokenType::QueryCommand,
                TokenType::Whitespace,
                TokenType::Function,
                TokenType::Punctuation,
                TokenType::FieldName,
                TokenType::Punctuation,
                TokenType::Whitespace,
                TokenType::Keyword,
                TokenType::Whitespace,
                TokenType::FieldName,
            ]
        );
    }
}
