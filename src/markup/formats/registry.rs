//! Format registry for tree serialization
//!
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::markup::ast::Element;
use crate::markup::config::SerializerConfig;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Trait for tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "markup", "json")
    fn name(&self) -> &str;

    fn serialize(&self, root: &Element) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the specified format
    pub fn serialize(&self, root: &Element, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(root)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::with_config(&SerializerConfig::default())
    }

    /// Built-in formatters, with markup indentation taken from `config`
    pub fn with_config(config: &SerializerConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::MarkupSerializer::with_indent(config.indent_width));
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
