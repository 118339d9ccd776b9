//! Property tests for encoding and translation.

use keyedfield_codec::{encode, extract_key};
use keyedfield_core::{ErrorKind, Fuzziness, Predicate, QueryError, TermQuery};
use keyedfield_testkit::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn encode_is_deterministic(key in key_strategy(), value in value_strategy()) {
        let first = encode(&key, &value);
        let second = encode(&key, &value);
        prop_assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn distinct_keys_do_not_overlap(
        k1 in key_strategy(),
        k2 in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        prop_assume!(k1 != k2);
        let t1 = encode(&k1, &v1);
        let t2 = encode(&k2, &v2);
        prop_assert_ne!(&t1, &t2);
        prop_assert!(!t2.starts_with(t1.as_bytes()));
        prop_assert!(!t1.starts_with(t2.as_bytes()));
    }

    #[test]
    fn exists_matches_exactly_the_keys_tokens(
        pairs in pairs_strategy(),
        probe in key_strategy(),
    ) {
        let dict = dictionary_of(&[(1, pairs.clone())]);
        let field = keyed_field(&probe);

        let expected: BTreeSet<Vec<u8>> = pairs
            .iter()
            .filter(|(k, _)| *k == probe)
            .map(|(k, v)| encode(k, v).as_bytes().to_vec())
            .collect();
        let actual: BTreeSet<Vec<u8>> = dict
            .matching_tokens(&field.queries().exists())
            .iter()
            .map(|t| t.as_bytes().to_vec())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn range_stays_within_key(
        pairs in pairs_strategy(),
        probe in key_strategy(),
        lower in value_strategy(),
        upper in value_strategy(),
        include_lower in any::<bool>(),
        include_upper in any::<bool>(),
    ) {
        let dict = dictionary_of(&[(1, pairs)]);
        let query = keyed_field(&probe)
            .queries()
            .range(Some(&lower), Some(&upper), include_lower, include_upper)
            .unwrap();
        for token in dict.matching_tokens(&query) {
            prop_assert_eq!(extract_key(token.as_bytes()).unwrap(), probe.as_str());
        }
    }

    #[test]
    fn range_requires_both_bounds(
        field in field_strategy("field"),
        lower in proptest::option::of(value_strategy()),
        upper in proptest::option::of(value_strategy()),
        include_lower in any::<bool>(),
        include_upper in any::<bool>(),
    ) {
        let result = field
            .queries()
            .range(lower.as_ref(), upper.as_ref(), include_lower, include_upper);
        match (&lower, &upper) {
            (Some(lo), Some(hi)) => {
                let expected = TermQuery::Range {
                    field: "field".into(),
                    low: encode(field.key(), lo),
                    high: encode(field.key(), hi),
                    include_low: include_lower,
                    include_high: include_upper,
                };
                prop_assert_eq!(result.unwrap(), expected);
            }
            _ => {
                let err = result.unwrap_err();
                prop_assert!(matches!(err, QueryError::MissingBound { .. }), "expected QueryError::MissingBound");
                prop_assert_eq!(err.kind(), ErrorKind::Validation);
            }
        }
    }

    #[test]
    fn equals_depends_only_on_indexed(field in field_strategy("field"), value in value_strategy()) {
        let result = field.queries().term(&value);
        if field.is_indexed() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn unsupported_predicates_always_fail(
        field in field_strategy("field"),
        value in value_strategy(),
        pattern in ".{0,8}",
    ) {
        let predicates: Vec<Predicate> = vec![
            Predicate::Fuzzy {
                value,
                fuzziness: Fuzziness::Auto,
                prefix_length: 0,
                max_expansions: 50,
                transpositions: true,
            },
            Predicate::Regexp {
                pattern: pattern.clone(),
                flags: 0,
                max_determinized_states: 10_000,
            },
            Predicate::wildcard(pattern),
        ];
        for predicate in predicates {
            let kind = predicate.kind();
            let err = field.queries().translate(predicate).unwrap_err();
            prop_assert_eq!(err, QueryError::unsupported(kind));
        }
    }
}
