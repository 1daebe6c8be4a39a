//! Tokenization of the log query language.
//!
//! The token stream produced here feeds both completion and syntax
//! highlighting: every byte of the input is covered, malformed input
//! degrades to `Unknown` tokens instead of failing, and classification
//! follows an ordered first-match-wins rule table.

pub mod catalog;
mod grammar;
mod lexer;
mod token;

pub use catalog::CatalogEntry;
pub use lexer::tokenize;
pub use token::{Token, TokenType};
