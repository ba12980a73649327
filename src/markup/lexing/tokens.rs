//! Token definitions for the TinyMarkup format
//!
//! The tokens are defined using the logos derive macro. Brackets are the only
//! structural characters; whitespace is only structural between elements.
use logos::Logos;

/// All possible tokens in TinyMarkup text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[regex(r"\s+")]
    Whitespace,

    // Catch-all for everything that is neither a bracket nor whitespace
    #[regex(r"[^\[\]\s]+")]
    Text,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
