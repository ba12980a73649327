//! Lexer for TinyMarkup source text
//!
//! Tokenization is handled by logos. The token set is tiny: the two bracket delimiters,
//! runs of whitespace, and runs of anything else. Every byte of the input belongs to
//! exactly one token, so leaf content can be sliced back out of the source by span.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::ops::Range;

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
