//! Canonical TinyMarkup serialization
//!
//! Writes a tree depth-first. Every element but the root starts on a new line, indented
//! two spaces (by default) per level of nesting:
//!
//! ```text
//! [[Root]
//!   [[Child]
//!     [[Count]42]
//!     [[Ratio]0.5f]
//!   ]
//! ]
//! ```
//!
//! Leaf values use the wire rendering of [`crate::markup::ast::Value`]; in particular
//! single-precision floats carry the `f` marker so they are typed the same way on the
//! next parse.
//!
//! The walk keeps its own stack, so trees built in code may nest arbitrarily deep.

use super::registry::{FormatError, Formatter};
use crate::markup::ast::Element;

/// Pending work for the serializer's explicit stack
enum Step<'a> {
    /// Write an element's header (and its value, for a leaf)
    Open(&'a Element, usize),
    /// Write the closing line of a node at the given depth
    Close(usize),
}

/// Pretty-printer for canonical markup text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupSerializer {
    indent_width: usize,
}

impl MarkupSerializer {
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    pub fn with_indent(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn serialize(&self, root: &Element) -> String {
        let mut output = String::new();
        let mut stack = vec![Step::Open(root, 0)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(element, depth) => {
                    self.write_header(element, depth, &mut output);
                    match element {
                        Element::Node(node) => {
                            stack.push(Step::Close(depth));
                            stack.extend(
                                node.children()
                                    .iter()
                                    .rev()
                                    .map(|child| Step::Open(child, depth + 1)),
                            );
                        }
                        Element::Leaf(leaf) => {
                            output.push_str(&leaf.value().to_string());
                            output.push(']');
                        }
                    }
                    log::trace!("wrote `{}` at depth {depth}", element.name());
                }
                Step::Close(depth) => {
                    output.push('\n');
                    self.write_indent(depth, &mut output);
                    output.push(']');
                }
            }
        }
        output
    }

    fn write_header(&self, element: &Element, depth: usize, output: &mut String) {
        if depth > 0 {
            output.push('\n');
            self.write_indent(depth, output);
        }
        output.push_str("[[");
        output.push_str(element.name());
        output.push(']');
    }

    fn write_indent(&self, depth: usize, output: &mut String) {
        output.push_str(&" ".repeat(depth * self.indent_width));
    }
}

impl Default for MarkupSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for MarkupSerializer {
    fn name(&self) -> &str {
        "markup"
    }

    fn serialize(&self, root: &Element) -> Result<String, FormatError> {
        Ok(MarkupSerializer::serialize(self, root))
    }

    fn description(&self) -> &str {
        "Canonical TinyMarkup text"
    }
}

/// Serialize `root` as canonical markup with the default indentation
pub fn serialize(root: &Element) -> String {
    MarkupSerializer::new().serialize(root)
}
