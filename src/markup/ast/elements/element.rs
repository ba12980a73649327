//! Element enum definition

use super::super::lookup::Descendants;
use super::super::traits::AstNode;
use super::leaf::Leaf;
use super::node::Node;
use serde::Serialize;
use std::fmt;

/// Element represents anything that can appear in a TinyMarkup tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Leaf(Leaf),
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Node(n) => n.name(),
            Element::Leaf(l) => l.name(),
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(n) => Some(n),
            Element::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Element::Leaf(l) => Some(l),
            Element::Node(_) => None,
        }
    }

    /// Children of a node; leaves have none
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Node(n) => n.children(),
            Element::Leaf(_) => &[],
        }
    }

    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self.children())
    }

    /// Leaf lookup starting at this element; a leaf matches itself
    pub fn find_leaf(&self, name: &str) -> Option<&Leaf> {
        match self {
            Element::Node(n) => n.find_leaf(name),
            Element::Leaf(l) => (l.name() == name).then_some(l),
        }
    }
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        match self {
            Element::Node(n) => n.node_type(),
            Element::Leaf(l) => l.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Element::Node(n) => n.display_label(),
            Element::Leaf(l) => l.display_label(),
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Leaf> for Element {
    fn from(leaf: Leaf) -> Self {
        Element::Leaf(leaf)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Node(n) => fmt::Display::fmt(n, f),
            Element::Leaf(l) => fmt::Display::fmt(l, f),
        }
    }
}
