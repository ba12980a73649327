//! JSON dump of element trees
//!
//! Elements are tagged by `type`, leaf values by `kind`:
//!
//! ```text
//! {"type": "leaf", "name": "Count", "value": {"kind": "integer", "value": 42}}
//! ```

use super::registry::{FormatError, Formatter};
use crate::markup::ast::Element;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, root: &Element) -> Result<String, FormatError> {
        serde_json::to_string_pretty(root)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "The tree as pretty-printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::{Leaf, Node};
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let root: Element = Node::new("Root")
            .unwrap()
            .with_child(Leaf::new("Count", 42i64).unwrap())
            .with_child(Leaf::new("Name", "x").unwrap())
            .into();

        let output = JsonFormatter.serialize(&root).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "node",
                "name": "Root",
                "children": [
                    {"type": "leaf", "name": "Count", "value": {"kind": "integer", "value": 42}},
                    {"type": "leaf", "name": "Name", "value": {"kind": "string", "value": "x"}}
                ]
            })
        );
    }
}
