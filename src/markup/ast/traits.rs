//! AST traits - Common interfaces for uniform element access

/// Common interface for all tree elements, used by the display formats
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
