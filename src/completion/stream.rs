//! Token stream navigation for completion.
//!
//! Tokens live in a flat arena and are addressed by index; walking backwards
//! or forwards never follows object references. The stream is rebuilt from
//! the request text on every completion call and discarded afterwards.

use crate::syntax::{Token, TokenType, tokenize};

/// Exclusion used by [`TokenStream::previous_excluding`]: either every token
/// of a type, or only tokens of a type with specific content.
#[derive(Debug, Clone, Copy)]
pub enum Exclude {
    /// Skip all tokens carrying this tag.
    Type(TokenType),
    /// Skip tokens carrying this tag whose content matches (case-insensitive).
    #[allow(dead_code)]
    TypeContent(TokenType, &'static str),
}

impl Exclude {
    fn matches(&self, token: &Token) -> bool {
        match *self {
            Exclude::Type(token_type) => token.is_type(token_type),
            Exclude::TypeContent(token_type, content) => token.is(token_type, content),
        }
    }
}

/// Flat token arena with cursor-oriented navigation.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wrap an already tokenized arena.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Tokenize `text` and wrap the result.
    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    /// Number of tokens in the stream.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the input produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Find the token containing the given byte offset.
    ///
    /// Tokens are scanned in order with an inclusive end bound
    /// (`start <= offset <= end`), so when the offset sits exactly on the
    /// boundary between two tokens, the token *ending* at the offset wins.
    /// A just-typed character therefore belongs to the token it terminates.
    /// Returns None when the offset lies beyond the input.
    pub fn token_at_offset(&self, offset: usize) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| token.start <= offset && offset <= token.end)
    }

    /// Nearest non-whitespace token before `index`.
    pub fn prev_non_whitespace(&self, index: usize) -> Option<usize> {
        self.tokens[..index]
            .iter()
            .rposition(|token| !token.is_type(TokenType::Whitespace))
    }

    /// Nearest non-whitespace token after `index`.
    pub fn next_non_whitespace(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, token)| !token.is_type(TokenType::Whitespace))
            .map(|(i, _)| i)
    }

    /// Walk backwards to the query command governing the token at `index`:
    /// the nearest command token whose own non-whitespace predecessor is
    /// absent or a command separator. A command token buried inside another
    /// stage's arguments does not govern anything.
    pub fn previous_command_token(&self, index: usize) -> Option<usize> {
        for candidate in (0..index).rev() {
            if !self.tokens[candidate].is_type(TokenType::QueryCommand) {
                continue;
            }
            let starts_stage = match self.prev_non_whitespace(candidate) {
                None => true,
                Some(prev) => self.tokens[prev].is_type(TokenType::CommandSeparator),
            };
            if starts_stage {
                return Some(candidate);
            }
        }
        None
    }

    /// Walk backwards from `index`, skipping every token matched by
    /// `exclude`, and return the first remaining token. Used to find semantic
    /// anchors such as the `by` keyword behind intervening fields, functions
    /// and punctuation.
    pub fn previous_excluding(&self, index: usize, exclude: &[Exclude]) -> Option<usize> {
        self.tokens[..index]
            .iter()
            .rposition(|token| !exclude.iter().any(|rule| rule.matches(token)))
    }
}
