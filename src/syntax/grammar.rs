//! Ordered grammar rules for the log query language.
//!
//! Tokenization is rule-driven: at each scan position the rules are tried in
//! order and the first match wins. Greedy string rules therefore precede the
//! field-name rule, and the regex-literal rule only fires where a regex can
//! actually occur. Rules that the grammar constrains with surrounding context
//! (comments, keywords, regex literals) carry a side condition next to their
//! pattern.

use std::sync::LazyLock;

use regex::Regex;

use super::catalog::{ALL_FUNCTIONS, KEYWORDS, QUERY_COMMANDS};
use super::token::TokenType;

/// Context required around a pattern match for the rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    /// No constraint.
    Always,
    /// Only at the start of the text or right after a newline.
    LineStart,
    /// Preceded and followed by at least one whitespace character.
    WhitespaceBounded,
    /// Followed by `|`, `,` or only whitespace up to the end of the text.
    /// Disambiguates a regex literal from division.
    RegexTerminator,
}

/// One classification rule: a pattern, the tags it assigns, and the context
/// it requires.
#[derive(Debug)]
pub struct GrammarRule {
    /// Primary tag for matched tokens.
    pub token_type: TokenType,
    /// Additional alias tag, if the grammar defines one.
    pub alias: Option<TokenType>,
    pattern: Regex,
    condition: Condition,
}

impl GrammarRule {
    fn new(
        token_type: TokenType,
        alias: Option<TokenType>,
        pattern: &str,
        condition: Condition,
    ) -> Self {
        Self {
            token_type,
            alias,
            pattern: Regex::new(pattern).expect("grammar pattern"),
            condition,
        }
    }

    /// Try to match this rule at byte position `pos` of `text`.
    ///
    /// # Returns
    /// * `Option<usize>` - Length of the match in bytes, or None.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        match self.condition {
            Condition::LineStart => {
                if pos != 0 && text.as_bytes()[pos - 1] != b'\n' {
                    return None;
                }
            }
            Condition::WhitespaceBounded => {
                let preceded = text[..pos].chars().next_back().is_some_and(char::is_whitespace);
                if !preceded {
                    return None;
                }
            }
            _ => {}
        }

        let len = self.pattern.find(&text[pos..])?.end();

        match self.condition {
            Condition::WhitespaceBounded => {
                let followed = text[pos + len..].chars().next().is_some_and(char::is_whitespace);
                followed.then_some(len)
            }
            Condition::RegexTerminator => {
                let rest = &text[pos + len..];
                let terminated = rest.starts_with('|')
                    || rest.starts_with(',')
                    || rest.chars().all(char::is_whitespace);
                terminated.then_some(len)
            }
            _ => Some(len),
        }
    }
}

/// The grammar, in match precedence order. Compiled once per process.
pub(crate) static GRAMMAR: LazyLock<Vec<GrammarRule>> = LazyLock::new(build_rules);

fn build_rules() -> Vec<GrammarRule> {
    let commands = QUERY_COMMANDS
        .iter()
        .map(|entry| entry.label)
        .collect::<Vec<_>>()
        .join("|");
    let functions = ALL_FUNCTIONS
        .iter()
        .flat_map(|catalog| catalog.iter().map(|entry| entry.label))
        .collect::<Vec<_>>()
        .join("|");
    let keywords = KEYWORDS.join("|");

    vec![
        GrammarRule::new(TokenType::Comment, None, r"^#[^\n]*", Condition::LineStart),
        GrammarRule::new(TokenType::String, None, r"^`[^`]*`", Condition::Always),
        GrammarRule::new(TokenType::String, None, r#"^"[^"]*""#, Condition::Always),
        GrammarRule::new(
            TokenType::Regex,
            None,
            r"^/[^/\n]*/",
            Condition::RegexTerminator,
        ),
        GrammarRule::new(
            TokenType::QueryCommand,
            Some(TokenType::Function),
            &format!(r"^(?i:{commands})\b"),
            Condition::Always,
        ),
        GrammarRule::new(
            TokenType::Function,
            None,
            &format!(r"^(?i:{functions})\b"),
            Condition::Always,
        ),
        GrammarRule::new(
            TokenType::Keyword,
            None,
            &format!(r"^(?i:{keywords})\b"),
            Condition::WhitespaceBounded,
        ),
        GrammarRule::new(
            TokenType::FieldName,
            None,
            r"^(@?[_a-zA-Z][_.0-9a-zA-Z]*|`[^`]*`)",
            Condition::Always,
        ),
        GrammarRule::new(
            TokenType::Number,
            None,
            r"^-?\d+(\.\d*)?([eE][+-]?\d+)?\b",
            Condition::Always,
        ),
        GrammarRule::new(
            TokenType::CommandSeparator,
            Some(TokenType::Punctuation),
            r"^\|",
            Condition::Always,
        ),
        GrammarRule::new(
            TokenType::ComparisonOperator,
            None,
            r"^([<>]=?|!?=)",
            Condition::Always,
        ),
        GrammarRule::new(TokenType::Punctuation, None, r"^[{}()`,.]", Condition::Always),
        GrammarRule::new(TokenType::Whitespace, None, r"^\s+", Condition::Always),
    ]
}
