//! End-to-end scenarios: translate predicates and run them against a
//! dictionary holding flattened documents.

use keyedfield_core::{
    CompositeToken, ErrorKind, Predicate, QueryError, RewriteMethod, TermQuery, Value,
};
use keyedfield_testkit::prelude::*;
use std::sync::Arc;
use std::thread;

fn token(bytes: &'static [u8]) -> CompositeToken {
    CompositeToken::from_bytes(bytes)
}

#[test]
fn encoding_scenarios() {
    let field = keyed_field("key");
    assert_eq!(
        field.indexed_value_for_search(&Value::from("value")).as_bytes(),
        b"key\0value"
    );
    assert_eq!(
        field.indexed_value_for_search(&Value::from(2.718)).as_bytes(),
        b"key\x002.718"
    );
    assert_eq!(
        field.indexed_value_for_search(&Value::from(true)).as_bytes(),
        b"key\0true"
    );
}

#[test]
fn translation_scenarios() {
    let field = keyed_field("key");
    let queries = field.queries();

    assert_eq!(
        queries.translate(Predicate::equals("value")).unwrap(),
        TermQuery::Exact {
            field: "field".into(),
            token: token(b"key\0value"),
        }
    );

    assert_eq!(
        queries
            .translate(Predicate::in_set(["value1", "value2"]))
            .unwrap(),
        TermQuery::Set {
            field: "field".into(),
            tokens: vec![token(b"key\0value1"), token(b"key\0value2")],
        }
    );

    let err = queries
        .translate(Predicate::range(
            None,
            Some(Value::from("upper")),
            false,
            false,
        ))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("both an upper and a lower bound"));
}

#[test]
fn equals_on_unindexed_field() {
    let field = unindexed_field("key");
    let err = field
        .queries()
        .translate(Predicate::equals("value"))
        .unwrap_err();
    assert_eq!(err, QueryError::not_indexed("field"));
}

#[test]
fn queries_over_sample_documents() {
    let dict = dictionary_of(&[
        (1, sample_pairs()),
        (
            2,
            vec![
                ("user.name", Value::from("bob")),
                ("user.age", Value::from(27i64)),
                ("user.tags", Value::from("ops")),
            ],
        ),
        (3, vec![("user.nickname", Value::from("al"))]),
    ]);

    let name = keyed_field("user.name");
    assert_eq!(dict.search(&name.queries().exists()), vec![1, 2]);
    assert_eq!(
        dict.search(&name.queries().term(&Value::from("bob")).unwrap()),
        vec![2]
    );
    assert_eq!(
        dict.search(&name.queries().prefix("al", Some(RewriteMethod::ConstantScore))),
        vec![1]
    );

    let tags = keyed_field("user.tags");
    assert_eq!(
        dict.search(&tags.queries().terms(&[Value::from("ops"), Value::from("dev")])),
        vec![1, 2]
    );

    let active = keyed_field("user.active");
    assert_eq!(
        dict.search(&active.queries().term(&Value::from(true)).unwrap()),
        vec![1]
    );

    let score = keyed_field("user.score");
    assert_eq!(
        dict.search(&score.queries().term(&Value::from(2.718)).unwrap()),
        vec![1]
    );
}

#[test]
fn prefix_of_key_does_not_leak() {
    let dict = dictionary_of(&[
        (1, vec![("user.name", Value::from("alice"))]),
        (2, vec![("user.names", Value::from("alice"))]),
    ]);

    let name = keyed_field("user.name");
    assert_eq!(dict.search(&name.queries().exists()), vec![1]);
    assert_eq!(dict.search(&name.queries().prefix("", None)), vec![1]);

    let query = name
        .queries()
        .range(Some(&Value::from("")), Some(&Value::from("\u{10ffff}")), true, true)
        .unwrap();
    assert_eq!(dict.search(&query), vec![1]);
}

#[test]
fn numeric_range_is_lexicographic() {
    let dict = dictionary_of(&[
        (1, vec![("n", Value::from(9i64))]),
        (2, vec![("n", Value::from(10i64))]),
        (3, vec![("n", Value::from(100i64))]),
    ]);

    let n = keyed_field("n");
    let query = n
        .queries()
        .range(Some(&Value::from(10i64)), Some(&Value::from(9i64)), true, true)
        .unwrap();
    // Canonical strings compare as text: "10" < "100" < "9".
    assert_eq!(dict.search(&query), vec![1, 2, 3]);
}

#[test]
fn split_queries_on_whitespace() {
    let dict = dictionary_of(&[
        (1, vec![("title", Value::from("quick"))]),
        (2, vec![("title", Value::from("fox"))]),
        (3, vec![("title", Value::from("quick fox"))]),
    ]);

    let keyword = keyed_field("title");
    assert_eq!(
        dict.search(&keyword.queries().match_text("quick fox").unwrap()),
        vec![3]
    );

    let split = keyedfield_core::FieldConfig::new("title")
        .name(FIELD_NAME)
        .split_queries_on_whitespace(true)
        .build()
        .unwrap();
    assert_eq!(
        dict.search(&split.queries().match_text("quick fox").unwrap()),
        vec![1, 2]
    );
}

#[test]
fn frozen_field_is_shared_across_threads() {
    let field = Arc::new(keyed_field("key"));
    let expected = field.queries().term(&Value::from("value")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let field = Arc::clone(&field);
            thread::spawn(move || field.queries().term(&Value::from("value")).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn display_values_from_matches() {
    let dict = dictionary_of(&[(1, sample_pairs())]);
    let tags = keyed_field("user.tags");
    let values: Vec<String> = dict
        .matching_tokens(&tags.queries().exists())
        .iter()
        .map(|t| tags.value_for_display(t.as_bytes()).unwrap().to_string())
        .collect();
    assert_eq!(values, vec!["admin", "ops"]);
}
