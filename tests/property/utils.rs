use proptest::prelude::*;
use serde_json::{Map, Number, Value};

/// A scalar JSON leaf the resolver accepts: string, integer, or boolean.
pub fn scalar_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Number(Number::from(i))),
        any::<String>().prop_map(Value::String),
    ]
}

/// Non-empty key paths with artifact-style segment contents (dots, slashes,
/// and colons included on purpose).
pub fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_./:-]{1,20}", 1..6)
}

/// Build the minimal document in which `segments` leads exactly to `leaf`.
pub fn nest(segments: &[String], leaf: Value) -> Value {
    let mut value = leaf;
    for segment in segments.iter().rev() {
        let mut object = Map::new();
        object.insert(segment.clone(), value);
        value = Value::Object(object);
    }
    value
}

/// Arbitrary JSON documents, a few levels deep.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Number(Number::from(i))),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::hash_map(any::<String>(), inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}
