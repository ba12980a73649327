//! Output format implementations for element trees
//!
//! - `markup` - canonical TinyMarkup text, the inverse of the parser
//! - `treeviz` - one line per element, for eyeballing a tree
//! - `json` - the tree as JSON
//!
//! All of them are reachable by name through the [`FormatRegistry`].

pub mod json;
pub mod markup;
pub mod registry;
pub mod treeviz;

pub use json::JsonFormatter;
pub use markup::{serialize, MarkupSerializer};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
