//! Sample trees for demos and tests

use crate::markup::ast::{ConstructionError, Leaf, Node};

/// The reference document:
///
/// ```text
/// Root
///   Child1
///     Leaf1 = " A + b = c"
///     Leaf2 = "general statement"
///   Child2
///     Child3
///       Leaf3 = "'string literal'"
/// ```
pub fn reference_document() -> Result<Node, ConstructionError> {
    let child1 = Node::new("Child1")?
        .with_child(Leaf::new("Leaf1", " A + b = c")?)
        .with_child(Leaf::new("Leaf2", "general statement")?);

    let child3 = Node::new("Child3")?.with_child(Leaf::new("Leaf3", "'string literal'")?);
    let child2 = Node::new("Child2")?.with_child(child3);

    Ok(Node::new("Root")?.with_child(child1).with_child(child2))
}

/// A small document with one leaf of every value kind
pub fn typed_document() -> Result<Node, ConstructionError> {
    Ok(Node::new("Settings")?
        .with_child(Leaf::new("Title", "TinyMarkup demo")?)
        .with_child(Leaf::new("Retries", 3i64)?)
        .with_child(Leaf::new("Ratio", 0.75f32)?)
        .with_child(Leaf::new("Threshold", 1e-3f64)?)
        .with_child(Node::new("Empty")?))
}
