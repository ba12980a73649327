//! Parsing TinyMarkup text into element trees
//!
//! [`parse`] is lenient: malformed markup never fails, it just produces a smaller tree,
//! and `None` when no element could be read at all. [`parse_strict`] reports the first
//! problem as a [`ParseError`] with its line and column.

pub mod error;
pub mod location;
pub mod parser;

pub use error::ParseError;
pub use location::{Position, SourceLocation};
pub use parser::Parser;

use crate::markup::ast::Element;
use crate::markup::config::ParserConfig;

/// Parse `source` with default, lenient recovery
///
/// `None` stands for "nothing could be parsed here" (empty or garbage input).
pub fn parse(source: &str) -> Option<Element> {
    parse_with(source, &ParserConfig::default()).ok().flatten()
}

/// Parse `source`, rejecting any malformed or trailing input
pub fn parse_strict(source: &str) -> Result<Element, ParseError> {
    let config = ParserConfig {
        strict: true,
        ..ParserConfig::default()
    };
    parse_with(source, &config)?.ok_or(ParseError::UnexpectedEnd {
        expected: "an element",
        position: Position::new(0, 0),
    })
}

pub fn parse_with(source: &str, config: &ParserConfig) -> Result<Option<Element>, ParseError> {
    Parser::new(source, config.clone()).parse()
}

/// True when a parse produced nothing
pub fn is_sentinel(parsed: &Option<Element>) -> bool {
    parsed.is_none()
}
