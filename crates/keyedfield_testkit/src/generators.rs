//! Property-based test generators using proptest.
//!
//! Provides strategies for keys, values and fields that respect the
//! encoding's preconditions.

use keyedfield_core::{FieldConfig, KeyedFieldType, Value};
use proptest::prelude::*;

/// Strategy for valid keys: dotted attribute paths without separator bytes.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}(\\.[a-z][a-z0-9_]{0,7}){0,2}")
        .expect("Invalid regex")
}

/// Strategy for text values, including empty and non-ASCII text.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 éü\\-]{0,16}").expect("Invalid regex")
}

/// Strategy for values of every kind.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        text_strategy().prop_map(Value::Text),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

/// Strategy for a keyed field on the physical field `name`.
pub fn field_strategy(name: &'static str) -> impl Strategy<Value = KeyedFieldType> {
    (key_strategy(), any::<bool>(), any::<bool>()).prop_map(move |(key, indexed, split)| {
        FieldConfig::new(key)
            .name(name)
            .indexed(indexed)
            .split_queries_on_whitespace(split)
            .build()
            .expect("generated keys are valid")
    })
}

/// Strategy for flattened documents: key/value pairs with repeated keys.
pub fn pairs_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..32)
}
