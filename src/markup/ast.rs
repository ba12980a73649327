//! Tree model for TinyMarkup documents
//!
//! A document is a single root [`Element`]. Elements are either a [`Node`], which owns an
//! ordered list of children, or a [`Leaf`], which owns one typed [`Value`].
//!
//! ## Modules
//!
//! - `elements` - Node, Leaf and the Element sum type
//! - `value` - the closed set of leaf value kinds
//! - `lookup` - pre-order traversal and name lookups
//! - `traits` - uniform access for display code
//! - `error` - construction errors

pub mod elements;
pub mod error;
pub mod lookup;
pub mod traits;
pub mod value;

pub use elements::{Element, Leaf, Node};
pub use error::ConstructionError;
pub use lookup::Descendants;
pub use traits::AstNode;
pub use value::{Value, ValueKind};
