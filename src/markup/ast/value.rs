//! Leaf values
//!
//! The set of value kinds is closed: a leaf holds a string, a 64-bit integer, or a
//! single- or double-precision float. The [`fmt::Display`] impl is the wire rendering
//! used by the markup serializer, and is what [`crate::markup::inference`] reads back:
//!
//! - `String` is written verbatim
//! - `Integer` is written as plain decimal (`-42`)
//! - `Float64` always carries a `.` or an exponent (`3.0`, `1e20`) so it never reads back
//!   as an integer
//! - `Float32` is written like `Float64` followed by the `f` type marker (`3.5f`)

use serde::Serialize;
use std::fmt;

/// A typed scalar held by a leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    String(String),
    Integer(i64),
    Float32(f32),
    Float64(f64),
}

/// The kind of a [`Value`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Float32,
    Float64,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers and both float widths widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float32(x) => Some(f64::from(*x)),
            Value::Float64(x) => Some(*x),
            Value::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            // Debug gives the shortest text that reads back to the same float, and always
            // includes a decimal point or exponent.
            Value::Float32(x) => write!(f, "{x:?}f"),
            Value::Float64(x) => write!(f, "{x:?}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
        };
        f.write_str(name)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float64(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(7i64).kind(), ValueKind::Integer);
        assert_eq!(Value::from(1.5f32).kind(), ValueKind::Float32);
        assert_eq!(Value::from(1.5f64).kind(), ValueKind::Float64);
    }

    #[test]
    fn test_display_integer() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Integer(i64::MAX).to_string(), "9223372036854775807");
    }

    #[test]
    fn test_display_floats_keep_decimal_point() {
        assert_eq!(Value::Float64(3.0).to_string(), "3.0");
        assert_eq!(Value::Float64(3.5).to_string(), "3.5");
        assert_eq!(Value::Float64(1e20).to_string(), "1e20");
        assert_eq!(Value::Float32(3.5).to_string(), "3.5f");
        assert_eq!(Value::Float32(-2.0).to_string(), "-2.0f");
    }

    #[test]
    fn test_display_string_is_verbatim() {
        assert_eq!(
            Value::from(" A + b = c").to_string(),
            " A + b = c",
            "leading whitespace must survive"
        );
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float32(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::from("3").as_f64(), None);
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::Integer(3).as_i64(), Some(3));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Float32.to_string(), "float32");
    }
}
