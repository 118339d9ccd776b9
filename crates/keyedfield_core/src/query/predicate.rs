//! High-level search predicates.

use keyedfield_codec::Value;
use std::fmt;

/// Kind of a predicate, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    /// Exact value equality.
    Term,
    /// Membership in a set of values.
    Terms,
    /// Any value present for the key.
    Exists,
    /// Canonical value starts with a prefix.
    Prefix,
    /// Canonical value within bounds.
    Range,
    /// Edit-distance matching.
    Fuzzy,
    /// Regular-expression matching.
    Regexp,
    /// Wildcard pattern matching.
    Wildcard,
}

impl PredicateKind {
    /// Returns the lowercase name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            PredicateKind::Term => "term",
            PredicateKind::Terms => "terms",
            PredicateKind::Exists => "exists",
            PredicateKind::Prefix => "prefix",
            PredicateKind::Range => "range",
            PredicateKind::Fuzzy => "fuzzy",
            PredicateKind::Regexp => "regexp",
            PredicateKind::Wildcard => "wildcard",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed edit distance for fuzzy predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuzziness {
    /// Distance chosen from the term length.
    Auto,
    /// Fixed number of edits.
    Edits(u8),
}

/// A search condition over the values of one key.
///
/// `R` is the rewrite strategy type of the query facade; it is carried
/// through prefix predicates untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<R = crate::query::RewriteMethod> {
    /// The value equals the given value.
    Equals(Value),
    /// The value is one of the given values.
    InSet(Vec<Value>),
    /// Any value is present.
    Exists,
    /// The canonical value starts with `prefix`.
    PrefixMatch {
        /// Prefix of the canonical value string.
        prefix: String,
        /// Rewrite strategy forwarded to the facade.
        rewrite: Option<R>,
    },
    /// The canonical value falls within the bounds.
    RangeMatch {
        /// Lower bound; required.
        lower: Option<Value>,
        /// Upper bound; required.
        upper: Option<Value>,
        /// Whether the lower bound matches.
        include_lower: bool,
        /// Whether the upper bound matches.
        include_upper: bool,
    },
    /// Edit-distance match. Always rejected.
    Fuzzy {
        /// Value to match.
        value: Value,
        /// Allowed edit distance.
        fuzziness: Fuzziness,
        /// Number of leading characters that must match exactly.
        prefix_length: usize,
        /// Maximum number of expanded terms.
        max_expansions: usize,
        /// Whether transpositions count as one edit.
        transpositions: bool,
    },
    /// Regular-expression match. Always rejected.
    Regexp {
        /// Pattern to match.
        pattern: String,
        /// Syntax flags.
        flags: u32,
        /// Automaton size limit.
        max_determinized_states: usize,
    },
    /// Wildcard match. Always rejected.
    Wildcard {
        /// Pattern to match.
        pattern: String,
    },
}

impl<R> Predicate<R> {
    /// Returns the kind of this predicate.
    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::Equals(_) => PredicateKind::Term,
            Predicate::InSet(_) => PredicateKind::Terms,
            Predicate::Exists => PredicateKind::Exists,
            Predicate::PrefixMatch { .. } => PredicateKind::Prefix,
            Predicate::RangeMatch { .. } => PredicateKind::Range,
            Predicate::Fuzzy { .. } => PredicateKind::Fuzzy,
            Predicate::Regexp { .. } => PredicateKind::Regexp,
            Predicate::Wildcard { .. } => PredicateKind::Wildcard,
        }
    }

    /// Creates an equality predicate.
    pub fn equals(value: impl Into<Value>) -> Self {
        Predicate::Equals(value.into())
    }

    /// Creates a set-membership predicate.
    pub fn in_set<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::InSet(values.into_iter().map(Into::into).collect())
    }

    /// Creates a prefix predicate without a rewrite strategy.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Predicate::PrefixMatch {
            prefix: prefix.into(),
            rewrite: None,
        }
    }

    /// Creates a range predicate.
    pub fn range(
        lower: Option<Value>,
        upper: Option<Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        Predicate::RangeMatch {
            lower,
            upper,
            include_lower,
            include_upper,
        }
    }

    /// Creates a wildcard predicate.
    pub fn wildcard(pattern: impl Into<String>) -> Self {
        Predicate::Wildcard {
            pattern: pattern.into(),
        }
    }
}
