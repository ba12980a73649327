//! Property-based tests for the parser and serializer
//!
//! Trees built from well-formed names and values must survive serialize -> parse
//! unchanged, and the parser must never panic, whatever it is fed.

use proptest::prelude::*;
use tinymarkup::markup::ast::{Element, Leaf, Node, Value};
use tinymarkup::markup::formats::MarkupSerializer;
use tinymarkup::markup::parsing::parse_strict;
use tinymarkup::{parse, serialize};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_. -]{0,8}"
}

/// Strings that cannot be read back as a number, a node body or a closed element
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        " {0,2}[A-Za-z'\"=][A-Za-z0-9 '\"=+.,!?-]{0,16}",
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        (-1e30f32..1e30f32).prop_map(Value::Float32),
        (-1e300f64..1e300f64).prop_map(Value::Float64),
        text_strategy().prop_map(Value::String),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Element> {
    let leaf = (name_strategy(), value_strategy())
        .prop_map(|(name, value)| Element::from(Leaf::new(name, value).unwrap()));

    leaf.prop_recursive(4, 48, 6, |inner| {
        (name_strategy(), prop::collection::vec(inner, 0..6)).prop_map(|(name, children)| {
            let mut node = Node::new(name).unwrap();
            for child in children {
                node.append_child(child);
            }
            Element::from(node)
        })
    })
}

proptest! {
    #[test]
    fn round_trip_preserves_tree(tree in tree_strategy()) {
        let text = serialize(&tree);
        prop_assert_eq!(parse(&text), Some(tree));
    }

    #[test]
    fn reserialization_is_stable(tree in tree_strategy()) {
        let first = serialize(&tree);
        let second = serialize(&parse(&first).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn strict_mode_accepts_serializer_output(tree in tree_strategy(), indent in 0usize..5) {
        let text = MarkupSerializer::with_indent(indent).serialize(&tree);
        prop_assert_eq!(parse_strict(&text).ok(), Some(tree));
    }

    #[test]
    fn parser_never_panics(input in "[\\[\\] \nA-Za-z0-9.f-]{0,64}") {
        let _ = parse(&input);
        let _ = parse_strict(&input);
    }

    #[test]
    fn parser_never_panics_on_arbitrary_text(input in any::<String>()) {
        let _ = parse(&input);
        let _ = parse_strict(&input);
    }
}
