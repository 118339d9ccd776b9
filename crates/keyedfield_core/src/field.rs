//! Frozen keyed field type.

use crate::analysis::SearchAnalyzer;
use crate::error::{QueryError, QueryResult};
use crate::query::{QueryFacade, QueryTranslator, TermQueries};
use keyedfield_codec::{encode, key_prefix, split_token, CompositeToken, Value};

/// An immutable keyed field.
///
/// Every value stored through this field is encoded as
/// `key || 0x00 || canonical value` in the physical field `name`.
/// Built with [`FieldConfig`](crate::FieldConfig); never mutated afterwards,
/// so it can be shared across threads without locking.
///
/// Two field types are equal when name, key and both flags are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyedFieldType {
    name: String,
    key: String,
    indexed: bool,
    split_queries_on_whitespace: bool,
}

impl KeyedFieldType {
    pub(crate) fn new(
        name: String,
        key: String,
        indexed: bool,
        split_queries_on_whitespace: bool,
    ) -> Self {
        Self {
            name,
            key,
            indexed,
            split_queries_on_whitespace,
        }
    }

    /// Returns the physical field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key bound to this field.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the field family name, `json`.
    pub fn type_name(&self) -> &'static str {
        crate::CONTENT_TYPE
    }

    /// Returns true if the field's tokens are searchable.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Returns true if free-text queries are split on whitespace.
    pub fn split_queries_on_whitespace(&self) -> bool {
        self.split_queries_on_whitespace
    }

    /// Returns the analyzer for free-text queries.
    pub fn search_analyzer(&self) -> SearchAnalyzer {
        SearchAnalyzer::for_split(self.split_queries_on_whitespace)
    }

    /// Encodes a value under this field's key.
    pub fn indexed_value_for_search(&self, value: &Value) -> CompositeToken {
        encode(&self.key, value)
    }

    /// Returns the canonical value of a token stored under this key.
    ///
    /// # Errors
    ///
    /// Fails if the token belongs to another key or is not UTF-8.
    pub fn value_for_display<'t>(&self, token: &'t [u8]) -> QueryResult<&'t str> {
        let prefix = key_prefix(&self.key);
        if !token.starts_with(prefix.as_bytes()) {
            return Err(QueryError::ForeignToken {
                field: self.name.clone(),
                key: self.key.clone(),
                token: CompositeToken::from_bytes(token.to_vec()).to_string(),
            });
        }
        let (_, value) = split_token(token)?;
        std::str::from_utf8(value)
            .map_err(|_| keyedfield_codec::CodecError::invalid_utf8("value").into())
    }

    /// Returns a translator producing [`TermQuery`](crate::TermQuery) values.
    pub fn queries(&self) -> QueryTranslator<'_, TermQueries> {
        QueryTranslator::new(self, TermQueries)
    }

    /// Returns a translator over a custom query facade.
    pub fn translator<F: QueryFacade>(&self, facade: F) -> QueryTranslator<'_, F> {
        QueryTranslator::new(self, facade)
    }

    pub(crate) fn check_indexed(&self) -> QueryResult<()> {
        if self.indexed {
            Ok(())
        } else {
            Err(QueryError::not_indexed(&self.name))
        }
    }
}
