//! Errors reported by the strict parser
//!
//! The default, lenient parser never returns these: it recovers locally and hands back
//! whatever tree it could build.

use super::location::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at {position}: expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        position: Position,
    },

    #[error("malformed name header at {position}: expected `[[`")]
    MalformedHeader { position: Position },

    #[error("name header starting at {position} has no closing `]`")]
    UnterminatedHeader { position: Position },

    #[error("empty element name at {position}")]
    EmptyName { position: Position },

    #[error("element `{name}` starting at {position} is never closed")]
    Unterminated { name: String, position: Position },

    #[error("unexpected input after the root element at {position}")]
    TrailingInput { position: Position },

    #[error("element at {position} is nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedEnd { position, .. }
            | ParseError::MalformedHeader { position }
            | ParseError::UnterminatedHeader { position }
            | ParseError::EmptyName { position }
            | ParseError::Unterminated { position, .. }
            | ParseError::TrailingInput { position }
            | ParseError::TooDeep { position, .. } => *position,
        }
    }
}
