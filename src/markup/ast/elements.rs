//! Element definitions

mod element;
mod leaf;
mod node;

pub use element::Element;
pub use leaf::Leaf;
pub use node::Node;
