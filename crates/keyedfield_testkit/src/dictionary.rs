//! In-memory ordered term dictionary.
//!
//! A stand-in for the index engine: it stores composite tokens for one
//! physical field in byte order and executes [`TermQuery`] values against
//! them, so translated queries can be checked end to end.

use keyedfield_core::{CompositeToken, KeyedFieldType, TermQuery, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Document identifier.
pub type DocId = u64;

/// Ordered token to documents mapping for a single physical field.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    field: String,
    entries: BTreeMap<CompositeToken, BTreeSet<DocId>>,
}

impl TermDictionary {
    /// Creates an empty dictionary for the physical field `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Returns the physical field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Adds a token for a document.
    pub fn insert(&mut self, token: CompositeToken, doc: DocId) {
        self.entries.entry(token).or_default().insert(doc);
    }

    /// Encodes `value` under the key of `field_type` and adds it.
    ///
    /// # Panics
    ///
    /// Panics if `field_type` targets a different physical field.
    pub fn index_value(&mut self, field_type: &KeyedFieldType, value: &Value, doc: DocId) {
        assert_eq!(field_type.name(), self.field, "field mismatch");
        self.insert(field_type.indexed_value_for_search(value), doc);
    }

    /// Removes a token for a document. Returns true if it was present.
    pub fn remove(&mut self, token: &CompositeToken, doc: DocId) -> bool {
        let Some(docs) = self.entries.get_mut(token) else {
            return false;
        };
        let removed = docs.remove(&doc);
        if docs.is_empty() {
            self.entries.remove(token);
        }
        removed
    }

    /// Returns the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every stored token in order.
    pub fn tokens(&self) -> impl Iterator<Item = &CompositeToken> {
        self.entries.keys()
    }

    /// Returns the stored tokens a query matches, in order.
    ///
    /// Queries on another physical field match nothing.
    pub fn matching_tokens(&self, query: &TermQuery) -> Vec<CompositeToken> {
        if query.field() != self.field || query.matches_nothing() {
            return Vec::new();
        }
        match query {
            TermQuery::Exact { token, .. } => self
                .entries
                .get_key_value(token)
                .map(|(t, _)| vec![t.clone()])
                .unwrap_or_default(),
            TermQuery::Set { tokens, .. } => tokens
                .iter()
                .filter(|t| self.entries.contains_key(*t))
                .cloned()
                .collect(),
            TermQuery::Prefix { prefix, .. } => self
                .entries
                .range((Bound::Included(prefix.clone()), Bound::Unbounded))
                .map(|(t, _)| t)
                .take_while(|t| t.starts_with(prefix.as_bytes()))
                .cloned()
                .collect(),
            TermQuery::Range {
                low,
                high,
                include_low,
                include_high,
                ..
            } => {
                let lower = if *include_low {
                    Bound::Included(low.clone())
                } else {
                    Bound::Excluded(low.clone())
                };
                let upper = if *include_high {
                    Bound::Included(high.clone())
                } else {
                    Bound::Excluded(high.clone())
                };
                self.entries
                    .range((lower, upper))
                    .map(|(t, _)| t.clone())
                    .collect()
            }
        }
    }

    /// Returns the documents a query matches, sorted and deduplicated.
    pub fn search(&self, query: &TermQuery) -> Vec<DocId> {
        let docs: BTreeSet<DocId> = self
            .matching_tokens(query)
            .iter()
            .filter_map(|t| self.entries.get(t))
            .flatten()
            .copied()
            .collect();
        docs.into_iter().collect()
    }
}
