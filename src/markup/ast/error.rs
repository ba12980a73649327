//! Error types for tree construction

use thiserror::Error;

/// Errors raised when building elements programmatically
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Every node and leaf needs a non-empty name
    #[error("element name must not be empty")]
    EmptyName,
}
