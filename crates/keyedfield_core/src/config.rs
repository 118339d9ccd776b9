//! Keyed field configuration.

use crate::error::{QueryError, QueryResult};
use crate::field::KeyedFieldType;
use keyedfield_codec::is_valid_key;
use tracing::debug;

/// Mutable setup state for a keyed field.
///
/// Configure with the builder methods, then call [`FieldConfig::build`] to
/// get an immutable [`KeyedFieldType`].
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Key bound to the field.
    pub key: String,

    /// Physical field name in the index.
    pub name: Option<String>,

    /// Whether the field's tokens are searchable.
    pub indexed: bool,

    /// Whether free-text queries are split on whitespace before encoding.
    pub split_queries_on_whitespace: bool,
}

impl FieldConfig {
    /// Creates a configuration for `key` with default settings.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            indexed: true,
            split_queries_on_whitespace: false,
        }
    }

    /// Sets the physical field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets whether the field is indexed.
    #[must_use]
    pub fn indexed(mut self, value: bool) -> Self {
        self.indexed = value;
        self
    }

    /// Sets whether free-text queries are split on whitespace.
    #[must_use]
    pub fn split_queries_on_whitespace(mut self, value: bool) -> Self {
        self.split_queries_on_whitespace = value;
        self
    }

    /// Validates the configuration and freezes it.
    ///
    /// # Errors
    ///
    /// Fails if the key is empty or contains the separator byte, or if no
    /// non-empty name was set.
    pub fn build(self) -> QueryResult<KeyedFieldType> {
        if !is_valid_key(&self.key) {
            return Err(QueryError::invalid_key(&self.key));
        }
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(QueryError::invalid_field("field name is required")),
        };
        debug!(
            field = %name,
            key = %self.key,
            indexed = self.indexed,
            split_queries_on_whitespace = self.split_queries_on_whitespace,
            "built keyed field"
        );
        Ok(KeyedFieldType::new(
            name,
            self.key,
            self.indexed,
            self.split_queries_on_whitespace,
        ))
    }
}
