//! Leaf element definition

use super::super::error::ConstructionError;
use super::super::traits::AstNode;
use super::super::value::Value;
use serde::Serialize;
use std::fmt;

/// A named element holding a single typed value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    name: String,
    value: Value,
}

impl Leaf {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self, ConstructionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructionError::EmptyName);
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl AstNode for Leaf {
    fn node_type(&self) -> &'static str {
        "Leaf"
    }
    fn display_label(&self) -> String {
        format!("{} = {} {}", self.name, self.value.kind(), self.value)
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leaf('{}', {} '{}')",
            self.name,
            self.value.kind(),
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::ValueKind;

    #[test]
    fn test_leaf_creation() {
        let leaf = Leaf::new("Count", 42i64).unwrap();
        assert_eq!(leaf.name(), "Count");
        assert_eq!(leaf.value().kind(), ValueKind::Integer);
    }

    #[test]
    fn test_leaf_rejects_empty_name() {
        assert_eq!(Leaf::new("", "x"), Err(ConstructionError::EmptyName));
    }

    #[test]
    fn test_display_label() {
        let leaf = Leaf::new("Ratio", 0.5f32).unwrap();
        assert_eq!(leaf.display_label(), "Ratio = float32 0.5f");
        assert_eq!(leaf.to_string(), "Leaf('Ratio', float32 '0.5f')");
    }
}
