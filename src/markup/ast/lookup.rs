//! Depth-first traversal over element trees

use super::elements::Element;

/// Pre-order iterator over the elements below a node
///
/// A node's own children are visited left to right, and each child node is fully
/// explored before its next sibling.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Element>>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(children: &'a [Element]) -> Self {
        Self {
            stack: vec![children.iter()],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(element) => {
                    if let Element::Node(node) = element {
                        self.stack.push(node.children().iter());
                    }
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
