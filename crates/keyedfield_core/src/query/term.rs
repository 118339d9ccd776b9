//! Default term-level query primitives.

use crate::query::QueryFacade;
use keyedfield_codec::CompositeToken;
use serde::Serialize;

/// Rewrite strategy for prefix queries.
///
/// The translator never inspects this; it is handed to the engine as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteMethod {
    /// Constant score for every matching document.
    ConstantScore,
    /// Boolean query over expanded terms, constant score.
    ConstantScoreBoolean,
    /// Boolean query over expanded terms, scored.
    ScoringBoolean,
    /// Keep the top N expanded terms, scored.
    TopTerms(usize),
}

/// A term-level query over composite tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TermQuery {
    /// Exact token match.
    Exact {
        /// Physical field name.
        field: String,
        /// Token to match.
        token: CompositeToken,
    },
    /// Any of a set of tokens. Tokens are sorted and deduplicated.
    Set {
        /// Physical field name.
        field: String,
        /// Tokens to match.
        tokens: Vec<CompositeToken>,
    },
    /// Every token starting with a prefix.
    Prefix {
        /// Physical field name.
        field: String,
        /// Required token prefix.
        prefix: CompositeToken,
        /// Rewrite strategy, if the caller chose one.
        #[serde(skip_serializing_if = "Option::is_none")]
        rewrite: Option<RewriteMethod>,
    },
    /// Tokens between two bounds.
    Range {
        /// Physical field name.
        field: String,
        /// Lower bound token.
        low: CompositeToken,
        /// Upper bound token.
        high: CompositeToken,
        /// Whether `low` itself matches.
        include_low: bool,
        /// Whether `high` itself matches.
        include_high: bool,
    },
}

impl TermQuery {
    /// Returns the physical field this query targets.
    pub fn field(&self) -> &str {
        match self {
            TermQuery::Exact { field, .. }
            | TermQuery::Set { field, .. }
            | TermQuery::Prefix { field, .. }
            | TermQuery::Range { field, .. } => field,
        }
    }

    /// Returns true if this query can never match a token.
    pub fn matches_nothing(&self) -> bool {
        match self {
            TermQuery::Set { tokens, .. } => tokens.is_empty(),
            TermQuery::Range {
                low,
                high,
                include_low,
                include_high,
                ..
            } => low > high || (low == high && !(*include_low && *include_high)),
            _ => false,
        }
    }

    /// Returns true if `token` satisfies this query.
    pub fn matches(&self, token: &[u8]) -> bool {
        match self {
            TermQuery::Exact { token: t, .. } => t.as_bytes() == token,
            TermQuery::Set { tokens, .. } => tokens
                .binary_search_by(|t| t.as_bytes().cmp(token))
                .is_ok(),
            TermQuery::Prefix { prefix, .. } => token.starts_with(prefix.as_bytes()),
            TermQuery::Range {
                low,
                high,
                include_low,
                include_high,
                ..
            } => {
                let above = if *include_low {
                    token >= low.as_bytes()
                } else {
                    token > low.as_bytes()
                };
                let below = if *include_high {
                    token <= high.as_bytes()
                } else {
                    token < high.as_bytes()
                };
                above && below
            }
        }
    }
}

/// Facade producing [`TermQuery`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermQueries;

impl QueryFacade for TermQueries {
    type Query = TermQuery;
    type Rewrite = RewriteMethod;

    fn exact_match(&self, field: &str, token: CompositeToken) -> TermQuery {
        TermQuery::Exact {
            field: field.to_string(),
            token,
        }
    }

    fn set_membership(&self, field: &str, mut tokens: Vec<CompositeToken>) -> TermQuery {
        tokens.sort();
        tokens.dedup();
        TermQuery::Set {
            field: field.to_string(),
            tokens,
        }
    }

    fn prefix_match(
        &self,
        field: &str,
        prefix: CompositeToken,
        rewrite: Option<RewriteMethod>,
    ) -> TermQuery {
        TermQuery::Prefix {
            field: field.to_string(),
            prefix,
            rewrite,
        }
    }

    fn range_match(
        &self,
        field: &str,
        low: CompositeToken,
        high: CompositeToken,
        include_low: bool,
        include_high: bool,
    ) -> TermQuery {
        TermQuery::Range {
            field: field.to_string(),
            low,
            high,
            include_low,
            include_high,
        }
    }
}
