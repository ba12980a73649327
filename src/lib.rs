//! # tinymarkup
//!
//! A parser and serializer for TinyMarkup, a small bracket-delimited tree format:
//!
//! ```text
//! [[Root]
//!   [[Greeting]hello world]
//!   [[Count]42]
//!   [[Ratio]0.5f]
//! ]
//! ```
//!
//! Text goes through [`markup::parsing`] into an [`Element`] tree and back out through
//! [`markup::formats`]. Leaf text is typed on the way in by [`markup::inference`].

pub mod markup;

pub use markup::ast::{ConstructionError, Element, Leaf, Node, Value, ValueKind};
pub use markup::formats::serialize;
pub use markup::parsing::{is_sentinel, parse, parse_strict, ParseError};
