//! Recursive-descent parser for TinyMarkup
//!
//! ## Grammar
//!
//! ```text
//! element    := ws header ws ( '[' element* ']' | content ']' )
//! header     := '[' '[' ws rawUntil(']') ']'
//! content    := rawUntil(']')
//! ```
//!
//! After the header, the parser looks past any whitespace without consuming it:
//!
//! - an opening bracket starts a node body, a run of elements closed by `]`
//! - end of input, or whitespace followed directly by `]`, is a node with no children
//!   (the serializer writes childless nodes as `[[Name]` + newline + `]`)
//! - anything else is leaf content, taken verbatim from right after the header up to
//!   the next `]`
//!
//! ## Recovery
//!
//! In the default lenient mode a broken header yields no element at that position and
//! the enclosing node skips it; an unclosed node keeps the children collected so far; an
//! unclosed leaf takes the rest of the input. Every recovery branch moves the cursor
//! forward, so parsing always terminates. Strict mode reports each of these as a
//! [`ParseError`] instead.
//!
//! Nesting is capped at [`ParserConfig::max_depth`]. Past the cap a lenient parse skips
//! the whole nested element, and a strict parse fails with [`ParseError::TooDeep`].

use super::error::ParseError;
use super::location::{Position, SourceLocation};
use crate::markup::ast::{Element, Node};
use crate::markup::config::ParserConfig;
use crate::markup::inference::infer_leaf;
use crate::markup::lexing::{tokenize, Token};
use std::ops::Range;

/// What follows a name header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Children,
    Empty,
    Content,
}

/// Single-pass parser over a token stream; the cursor only moves forward
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    config: ParserConfig,
    location: SourceLocation,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: ParserConfig) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
            config,
            location: SourceLocation::new(source),
        }
    }

    /// Parse a whole document: one root element
    ///
    /// `Ok(None)` means nothing could be parsed (only possible in lenient mode).
    pub fn parse(mut self) -> Result<Option<Element>, ParseError> {
        let root = self.element(0)?;
        self.skip_whitespace();

        if self.config.strict {
            if root.is_none() {
                return Err(ParseError::UnexpectedEnd {
                    expected: "an element",
                    position: self.position_at(self.offset()),
                });
            }
            if !self.at_end() {
                return Err(ParseError::TrailingInput {
                    position: self.position_at(self.offset()),
                });
            }
        } else if !self.at_end() {
            log::debug!(
                "ignoring trailing input after the root element at byte {}",
                self.offset()
            );
        }

        Ok(root)
    }

    fn element(&mut self, depth: usize) -> Result<Option<Element>, ParseError> {
        self.skip_whitespace();
        let start = self.offset();

        if depth >= self.config.max_depth && !self.at_end() {
            if self.config.strict {
                return Err(ParseError::TooDeep {
                    max_depth: self.config.max_depth,
                    position: self.position_at(start),
                });
            }
            log::debug!(
                "skipping element at byte {start}: nesting exceeds {} levels",
                self.config.max_depth
            );
            self.skip_balanced();
            return Ok(None);
        }

        let Some(name) = self.header()? else {
            return Ok(None);
        };
        log::trace!("element `{name}` at byte {start}");

        match self.body() {
            Body::Children => self.node_body(name, start, depth).map(Some),
            Body::Empty => {
                self.skip_whitespace();
                if self.peek() == Some(Token::CloseBracket) {
                    self.advance();
                } else if self.config.strict {
                    return Err(ParseError::Unterminated {
                        name,
                        position: self.position_at(start),
                    });
                }
                Ok(Some(self.node(name, start)?.into()))
            }
            Body::Content => self.leaf_body(name, start).map(Some),
        }
    }

    /// `[[name]`, with the name taken raw after any leading whitespace
    fn header(&mut self) -> Result<Option<String>, ParseError> {
        let start = self.offset();

        if self.at_end() {
            if self.config.strict {
                return Err(ParseError::UnexpectedEnd {
                    expected: "a name header",
                    position: self.position_at(start),
                });
            }
            return Ok(None);
        }

        for _ in 0..2 {
            if self.peek() != Some(Token::OpenBracket) {
                return self.recover(|| ParseError::MalformedHeader {
                    position: self.position_at(start),
                });
            }
            self.advance();
        }

        self.skip_whitespace();
        let name_start = self.offset();
        let Some(close) = self.find_close_bracket() else {
            self.pos = self.tokens.len();
            return self.recover(|| ParseError::UnterminatedHeader {
                position: self.position_at(start),
            });
        };
        let name_end = self.tokens[close].1.start;
        self.pos = close + 1;

        if name_start == name_end {
            return self.recover(|| ParseError::EmptyName {
                position: self.position_at(start),
            });
        }

        Ok(Some(self.source[name_start..name_end].to_string()))
    }

    /// Decide the body kind by looking past whitespace; consumes nothing
    fn body(&self) -> Body {
        let mut index = self.pos;
        let mut saw_whitespace = false;

        while let Some((token, _)) = self.tokens.get(index) {
            match token {
                Token::Whitespace => saw_whitespace = true,
                Token::OpenBracket => return Body::Children,
                Token::CloseBracket if saw_whitespace => return Body::Empty,
                Token::CloseBracket | Token::Text => return Body::Content,
            }
            index += 1;
        }

        Body::Empty
    }

    fn node_body(
        &mut self,
        name: String,
        start: usize,
        depth: usize,
    ) -> Result<Element, ParseError> {
        let mut node = self.node(name, start)?;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    if self.config.strict {
                        return Err(ParseError::Unterminated {
                            name: node.name().to_string(),
                            position: self.position_at(start),
                        });
                    }
                    log::debug!(
                        "node `{}` is never closed; keeping {} children",
                        node.name(),
                        node.len()
                    );
                    break;
                }
                Some(Token::CloseBracket) => {
                    self.advance();
                    break;
                }
                Some(_) => {}
            }

            let before = self.pos;
            match self.element(depth + 1)? {
                Some(child) => node.append_child(child),
                None => {
                    log::debug!(
                        "skipping unparseable child of `{}` at byte {}",
                        node.name(),
                        self.offset()
                    );
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        Ok(node.into())
    }

    fn leaf_body(&mut self, name: String, start: usize) -> Result<Element, ParseError> {
        let content_start = self.offset();
        let content_end = match self.find_close_bracket() {
            Some(close) => {
                let end = self.tokens[close].1.start;
                self.pos = close + 1;
                end
            }
            None => {
                if self.config.strict {
                    return Err(ParseError::Unterminated {
                        name,
                        position: self.position_at(start),
                    });
                }
                log::debug!("leaf `{name}` is never closed; taking the rest of the input");
                self.pos = self.tokens.len();
                self.source.len()
            }
        };

        let raw = &self.source[content_start..content_end];
        let leaf = infer_leaf(name, raw).map_err(|_| ParseError::EmptyName {
            position: self.position_at(start),
        })?;
        log::trace!("leaf `{}` typed as {}", leaf.name(), leaf.value().kind());
        Ok(leaf.into())
    }

    fn node(&self, name: String, start: usize) -> Result<Node, ParseError> {
        Node::new(name).map_err(|_| ParseError::EmptyName {
            position: self.position_at(start),
        })
    }

    /// In strict mode fail with `error()`, otherwise yield no element here
    fn recover<T>(&self, error: impl FnOnce() -> ParseError) -> Result<Option<T>, ParseError> {
        if self.config.strict {
            return Err(error());
        }
        log::debug!("recovering from malformed input near byte {}", self.offset());
        Ok(None)
    }

    /// Move past one element without building it, by matching up its brackets
    ///
    /// A header opens two brackets and closes one; its body closes the last one.
    fn skip_balanced(&mut self) {
        let mut open = 0usize;
        while let Some(token) = self.peek() {
            self.advance();
            match token {
                Token::OpenBracket => open += 1,
                Token::CloseBracket => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        return;
                    }
                }
                Token::Whitespace | Token::Text => {
                    if open == 0 {
                        return;
                    }
                }
            }
        }
    }

    fn find_close_bracket(&self) -> Option<usize> {
        (self.pos..self.tokens.len()).find(|&i| self.tokens[i].0 == Token::CloseBracket)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|token| token.is_whitespace()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte offset of the cursor
    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), |(_, span)| span.start)
    }

    fn position_at(&self, offset: usize) -> Position {
        self.location.byte_to_position(offset)
    }
}
