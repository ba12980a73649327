//! Treeviz formatter
//!
//! One line per element, with box-drawing connectors showing the nesting. Labels are
//! truncated to 40 characters.
//!
//! ```text
//! Node: Root
//! ├─ Node: Child1
//! │ ├─ Leaf: Leaf1 = string  A + b = c
//! │ └─ Leaf: Leaf2 = string general statement
//! └─ Node: Child2
//! ```

use super::registry::{FormatError, Formatter};
use crate::markup::ast::{AstNode, Element};

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(root: &Element) -> String {
    let mut result = format!(
        "{}: {}\n",
        root.node_type(),
        truncate(&root.display_label(), MAX_LABEL_CHARS)
    );
    append_children(&mut result, root.children(), "");
    result
}

fn append_children(result: &mut String, children: &[Element], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };

        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            child.node_type(),
            truncate(&child.display_label(), MAX_LABEL_CHARS)
        ));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, child.children(), &new_prefix);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, root: &Element) -> Result<String, FormatError> {
        Ok(to_treeviz_str(root))
    }

    fn description(&self) -> &str {
        "One line per element with tree connectors"
    }
}
