//! Predicate to query-primitive translation.

use crate::error::{QueryError, QueryResult};
use crate::field::KeyedFieldType;
use crate::query::{Fuzziness, Predicate, PredicateKind, QueryFacade};
use keyedfield_codec::{encode, encode_raw, key_prefix, Value};
use tracing::debug;

/// Translates predicates on one keyed field into facade queries.
///
/// Translation is pure: it reads the frozen field type and builds a query,
/// so a translator can be shared freely between threads if the facade can.
#[derive(Debug, Clone)]
pub struct QueryTranslator<'a, F> {
    field: &'a KeyedFieldType,
    facade: F,
}

impl<'a, F: QueryFacade> QueryTranslator<'a, F> {
    /// Creates a translator for `field` over `facade`.
    pub fn new(field: &'a KeyedFieldType, facade: F) -> Self {
        Self { field, facade }
    }

    /// Returns the field this translator targets.
    pub fn field(&self) -> &KeyedFieldType {
        self.field
    }

    /// Translates any predicate.
    pub fn translate(&self, predicate: Predicate<F::Rewrite>) -> QueryResult<F::Query> {
        debug!(
            field = self.field.name(),
            key = self.field.key(),
            kind = %predicate.kind(),
            "translating predicate"
        );
        match predicate {
            Predicate::Equals(value) => self.term(&value),
            Predicate::InSet(values) => Ok(self.terms(&values)),
            Predicate::Exists => Ok(self.exists()),
            Predicate::PrefixMatch { prefix, rewrite } => Ok(self.prefix(&prefix, rewrite)),
            Predicate::RangeMatch {
                lower,
                upper,
                include_lower,
                include_upper,
            } => self.range(lower.as_ref(), upper.as_ref(), include_lower, include_upper),
            Predicate::Fuzzy {
                value,
                fuzziness,
                prefix_length,
                max_expansions,
                transpositions,
            } => self.fuzzy(
                &value,
                fuzziness,
                prefix_length,
                max_expansions,
                transpositions,
            ),
            Predicate::Regexp {
                pattern,
                flags,
                max_determinized_states,
            } => self.regexp(&pattern, flags, max_determinized_states),
            Predicate::Wildcard { pattern } => self.wildcard(&pattern),
        }
    }

    /// Exact match on `encode(key, value)`. Requires an indexed field.
    pub fn term(&self, value: &Value) -> QueryResult<F::Query> {
        self.field.check_indexed()?;
        let token = encode(self.field.key(), value);
        Ok(self.facade.exact_match(self.field.name(), token))
    }

    /// Set membership over the encoded values. An empty slice yields a
    /// query that matches nothing.
    pub fn terms(&self, values: &[Value]) -> F::Query {
        let key = self.field.key();
        let tokens = values.iter().map(|v| encode(key, v)).collect();
        self.facade.set_membership(self.field.name(), tokens)
    }

    /// Prefix match on `key || 0x00`, i.e. any value for the key.
    pub fn exists(&self) -> F::Query {
        self.facade
            .prefix_match(self.field.name(), key_prefix(self.field.key()), None)
    }

    /// Prefix match on `key || 0x00 || prefix`.
    pub fn prefix(&self, prefix: &str, rewrite: Option<F::Rewrite>) -> F::Query {
        let token = encode_raw(self.field.key(), prefix);
        self.facade.prefix_match(self.field.name(), token, rewrite)
    }

    /// Range over `[encode(key, lower), encode(key, upper)]`.
    ///
    /// Both bounds are required; an open range would escape into the
    /// neighbouring keys' tokens.
    pub fn range(
        &self,
        lower: Option<&Value>,
        upper: Option<&Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> QueryResult<F::Query> {
        let (Some(lower), Some(upper)) = (lower, upper) else {
            return Err(QueryError::missing_bound(PredicateKind::Range));
        };
        let key = self.field.key();
        Ok(self.facade.range_match(
            self.field.name(),
            encode(key, lower),
            encode(key, upper),
            include_lower,
            include_upper,
        ))
    }

    /// Always fails.
    pub fn fuzzy(
        &self,
        _value: &Value,
        _fuzziness: Fuzziness,
        _prefix_length: usize,
        _max_expansions: usize,
        _transpositions: bool,
    ) -> QueryResult<F::Query> {
        Err(QueryError::unsupported(PredicateKind::Fuzzy))
    }

    /// Always fails.
    pub fn regexp(
        &self,
        _pattern: &str,
        _flags: u32,
        _max_determinized_states: usize,
    ) -> QueryResult<F::Query> {
        Err(QueryError::unsupported(PredicateKind::Regexp))
    }

    /// Always fails.
    pub fn wildcard(&self, _pattern: &str) -> QueryResult<F::Query> {
        Err(QueryError::unsupported(PredicateKind::Wildcard))
    }

    /// Analyzes free text with the field's search analyzer and matches the
    /// resulting pieces. Requires an indexed field.
    ///
    /// One piece becomes an exact match, several become set membership.
    pub fn match_text(&self, text: &str) -> QueryResult<F::Query> {
        self.field.check_indexed()?;
        let mut pieces = self.field.search_analyzer().analyze(text);
        if pieces.len() == 1 {
            let piece = pieces.remove(0);
            return self.term(&Value::Text(piece));
        }
        let values: Vec<Value> = pieces.into_iter().map(Value::Text).collect();
        Ok(self.terms(&values))
    }
}
