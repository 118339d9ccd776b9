//! Test fixtures for keyed fields.

use crate::dictionary::{DocId, TermDictionary};
use keyedfield_core::{FieldConfig, KeyedFieldType, Value};

/// Physical field name used by fixtures.
pub const FIELD_NAME: &str = "field";

/// Creates an indexed keyed field on [`FIELD_NAME`].
pub fn keyed_field(key: &str) -> KeyedFieldType {
    FieldConfig::new(key)
        .name(FIELD_NAME)
        .build()
        .expect("fixture key is valid")
}

/// Creates a non-indexed keyed field on [`FIELD_NAME`].
pub fn unindexed_field(key: &str) -> KeyedFieldType {
    FieldConfig::new(key)
        .name(FIELD_NAME)
        .indexed(false)
        .build()
        .expect("fixture key is valid")
}

/// Flattened entries of a small user document.
pub fn sample_pairs() -> Vec<(&'static str, Value)> {
    vec![
        ("user.name", Value::from("alice")),
        ("user.age", Value::from(34i64)),
        ("user.active", Value::from(true)),
        ("user.score", Value::from(2.718)),
        ("user.tags", Value::from("admin")),
        ("user.tags", Value::from("ops")),
        ("user.names", Value::from("al")),
    ]
}

/// Builds a dictionary on [`FIELD_NAME`] holding `pairs` for each document.
pub fn dictionary_of<K: AsRef<str>>(docs: &[(DocId, Vec<(K, Value)>)]) -> TermDictionary {
    let mut dict = TermDictionary::new(FIELD_NAME);
    for (doc, pairs) in docs {
        for (key, value) in pairs {
            dict.index_value(&keyed_field(key.as_ref()), value, *doc);
        }
    }
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_build() {
        assert!(keyed_field("key").is_indexed());
        assert!(!unindexed_field("key").is_indexed());
        let dict = dictionary_of(&[(1, sample_pairs())]);
        assert_eq!(dict.len(), sample_pairs().len());
    }
}
