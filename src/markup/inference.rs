//! Value inference for leaf content
//!
//! Raw leaf text is typed by trying each kind in a fixed order, first match wins:
//!
//! 1. Integer: optional sign and decimal digits, within the `i64` range
//! 2. Float32: a float literal followed by the `f` marker, e.g. `3.5f`
//! 3. Float64: a float literal, e.g. `3.5`, `-1e20`, `.25`
//! 4. String: anything else, kept byte for byte
//!
//! Integers come before floats so `3` stays an integer, and the `f` form comes before
//! the plain float so the marker is never silently dropped. Out-of-range integers fall
//! through to Float64. Words such as `inf` or `NaN` are not float literals here and end
//! up as strings, and so does a literal too large for its width (`1e400`, `1e39f`):
//! a float value is always finite.

use crate::markup::ast::{ConstructionError, Leaf, Value};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that tags a float literal as single precision
pub const FLOAT32_MARKER: char = 'f';

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap()
});

/// Type `raw` as the first matching value kind
pub fn infer_value(raw: &str) -> Value {
    if let Some(i) = parse_integer(raw) {
        return Value::Integer(i);
    }
    if let Some(x) = parse_float32(raw) {
        return Value::Float32(x);
    }
    if let Some(x) = parse_float64(raw) {
        return Value::Float64(x);
    }
    Value::String(raw.to_string())
}

/// Build a leaf from its name and raw content
pub fn infer_leaf(name: impl Into<String>, raw: &str) -> Result<Leaf, ConstructionError> {
    Leaf::new(name, infer_value(raw))
}

pub fn parse_integer(raw: &str) -> Option<i64> {
    if !INTEGER.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

pub fn parse_float32(raw: &str) -> Option<f32> {
    let literal = raw.strip_suffix(FLOAT32_MARKER)?;
    if !FLOAT.is_match(literal) {
        return None;
    }
    literal.parse().ok().filter(|x: &f32| x.is_finite())
}

pub fn parse_float64(raw: &str) -> Option<f64> {
    if !FLOAT.is_match(raw) {
        return None;
    }
    raw.parse().ok().filter(|x: &f64| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Value::Integer(42))]
    #[case("-7", Value::Integer(-7))]
    #[case("+7", Value::Integer(7))]
    #[case("3.5f", Value::Float32(3.5))]
    #[case("-2f", Value::Float32(-2.0))]
    #[case("3.5", Value::Float64(3.5))]
    #[case("1e3", Value::Float64(1000.0))]
    #[case(".25", Value::Float64(0.25))]
    #[case("5.", Value::Float64(5.0))]
    #[case("abc", Value::String("abc".into()))]
    #[case("f", Value::String("f".into()))]
    #[case("3.5ff", Value::String("3.5ff".into()))]
    #[case("inf", Value::String("inf".into()))]
    #[case("NaN", Value::String("NaN".into()))]
    #[case(" 42", Value::String(" 42".into()))]
    #[case("", Value::String(String::new()))]
    #[case("1e39f", Value::String("1e39f".into()))]
    #[case("1e400", Value::String("1e400".into()))]
    #[case("-1e400", Value::String("-1e400".into()))]
    fn test_precedence(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(infer_value(raw), expected);
    }

    #[test]
    fn test_integer_overflow_falls_through() {
        let value = infer_value("99999999999999999999");
        assert_eq!(value, Value::Float64(1e20));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_integer("9223372036854775808"), None);
    }

    #[test]
    fn test_float32_keeps_single_precision() {
        assert_eq!(parse_float32("0.1f"), Some(0.1f32));
        assert_eq!(parse_float32("0.1"), None);
    }

    #[test]
    fn test_out_of_range_floats_are_not_floats() {
        assert_eq!(parse_float32("1e39"), None);
        assert_eq!(parse_float64("1e400"), None);
        // Underflow rounds to zero, which is still a finite value
        assert_eq!(parse_float64("1e-400"), Some(0.0));
        // Too wide for f32, fine as f64
        assert_eq!(infer_value("1e39"), Value::Float64(1e39));
    }

    #[test]
    fn test_infer_leaf() {
        let leaf = infer_leaf("Count", "12").unwrap();
        assert_eq!(leaf.value(), &Value::Integer(12));
        assert!(infer_leaf("", "12").is_err());
    }
}
