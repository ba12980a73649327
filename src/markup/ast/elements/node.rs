//! Node element definition

use super::super::error::ConstructionError;
use super::super::lookup::Descendants;
use super::super::traits::AstNode;
use super::element::Element;
use super::leaf::Leaf;
use serde::Serialize;
use std::fmt;

/// A named container with an ordered, append-only list of children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    name: String,
    children: Vec<Element>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Result<Self, ConstructionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructionError::EmptyName);
        }
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `child` after the existing children
    pub fn append_child(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Node::append_child`]
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every element below this node, in depth-first pre-order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// First leaf named `name` in depth-first pre-order
    pub fn find_leaf(&self, name: &str) -> Option<&Leaf> {
        self.descendants()
            .filter_map(Element::as_leaf)
            .find(|leaf| leaf.name() == name)
    }

    /// First node named `name` in depth-first pre-order, not counting this node
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.descendants()
            .filter_map(Element::as_node)
            .find(|node| node.name() == name)
    }
}

// Children are moved onto a work list before they drop, so a deep tree is freed
// without one stack frame per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(element) = pending.pop() {
            if let Element::Node(mut node) = element {
                pending.append(&mut node.children);
            }
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        "Node"
    }
    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node('{}', {} children)", self.name, self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::Value;

    fn leaf(name: &str, value: impl Into<Value>) -> Leaf {
        Leaf::new(name, value).unwrap()
    }

    #[test]
    fn test_node_creation() {
        let node = Node::new("Root").unwrap();
        assert_eq!(node.name(), "Root");
        assert!(node.is_empty());
    }

    #[test]
    fn test_node_rejects_empty_name() {
        assert_eq!(Node::new(""), Err(ConstructionError::EmptyName));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut node = Node::new("Root").unwrap();
        node.append_child(leaf("b", 1i64));
        node.append_child(Node::new("a").unwrap());
        node.append_child(leaf("c", "x"));

        let names: Vec<_> = node.children().iter().map(Element::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(node.len(), 3);
    }

    #[test]
    fn test_find_leaf_is_preorder() {
        // Root { A { Inner { x = 1 } }, x = 2 }: the nested x comes first
        let root = Node::new("Root")
            .unwrap()
            .with_child(
                Node::new("A")
                    .unwrap()
                    .with_child(Node::new("Inner").unwrap().with_child(leaf("x", 1i64))),
            )
            .with_child(leaf("x", 2i64));

        assert_eq!(root.find_leaf("x").unwrap().value(), &Value::Integer(1));
    }

    #[test]
    fn test_find_leaf_skips_nodes_with_same_name() {
        let root = Node::new("Root")
            .unwrap()
            .with_child(Node::new("x").unwrap())
            .with_child(leaf("x", "leaf"));

        assert_eq!(root.find_leaf("x").unwrap().value(), &Value::from("leaf"));
    }

    #[test]
    fn test_find_leaf_missing() {
        let root = Node::new("Root").unwrap().with_child(leaf("a", 1i64));
        assert!(root.find_leaf("b").is_none());
    }

    #[test]
    fn test_find_node() {
        let root = Node::new("Root")
            .unwrap()
            .with_child(Node::new("A").unwrap().with_child(Node::new("B").unwrap()));
        assert_eq!(root.find_node("B").unwrap().name(), "B");
        assert!(root.find_node("Root").is_none());
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = Node::new("N").unwrap();
        for _ in 0..200_000 {
            node = Node::new("N").unwrap().with_child(node);
        }
        assert_eq!(node.len(), 1);
        drop(node);
    }

    #[test]
    fn test_display() {
        let node = Node::new("Root").unwrap().with_child(leaf("a", 1i64));
        assert_eq!(node.to_string(), "Node('Root', 1 children)");
    }
}
