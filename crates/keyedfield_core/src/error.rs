//! Error types for keyed field operations.

use crate::query::PredicateKind;
use thiserror::Error;

/// Result type for field and query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Broad category of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The field is configured in a way that forbids the operation.
    Configuration,
    /// The operands of a predicate are incomplete or malformed.
    Validation,
    /// The predicate kind cannot be expressed over composite tokens.
    Unsupported,
}

/// Errors raised while building keyed fields or translating predicates.
///
/// All errors are raised before any query reaches the index engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The predicate needs an indexed field.
    #[error("Cannot search on field [{field}] since it is not indexed.")]
    NotIndexed {
        /// Name of the field.
        field: String,
    },

    /// A range predicate is missing one or both bounds.
    #[error("[{kind}] queries on keyed [{family}] fields must include both an upper and a lower bound.")]
    MissingBound {
        /// Predicate kind that was rejected.
        kind: PredicateKind,
        /// Field family name.
        family: &'static str,
    },

    /// The predicate kind is never supported on keyed fields.
    #[error("[{kind}] queries are not currently supported on [{family}] fields.")]
    UnsupportedPredicate {
        /// Predicate kind that was rejected.
        kind: PredicateKind,
        /// Field family name.
        family: &'static str,
    },

    /// The key cannot be embedded in a token.
    #[error("invalid key [{key}]: keys must be non-empty and must not contain the separator byte")]
    InvalidKey {
        /// The rejected key, with control bytes escaped.
        key: String,
    },

    /// The field definition is incomplete.
    #[error("invalid field: {message}")]
    InvalidField {
        /// Description of the problem.
        message: String,
    },

    /// A token handed back for display does not belong to this field's key.
    #[error("token [{token}] does not belong to key [{key}] of field [{field}]")]
    ForeignToken {
        /// Name of the field.
        field: String,
        /// Key of the field.
        key: String,
        /// The offending token, escaped.
        token: String,
    },

    /// Token decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] keyedfield_codec::CodecError),
}

impl QueryError {
    /// Creates a not-indexed error.
    pub fn not_indexed(field: impl Into<String>) -> Self {
        Self::NotIndexed {
            field: field.into(),
        }
    }

    /// Creates a missing-bound error.
    pub fn missing_bound(kind: PredicateKind) -> Self {
        Self::MissingBound {
            kind,
            family: crate::CONTENT_TYPE,
        }
    }

    /// Creates an unsupported-predicate error.
    pub fn unsupported(kind: PredicateKind) -> Self {
        Self::UnsupportedPredicate {
            kind,
            family: crate::CONTENT_TYPE,
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(key: &str) -> Self {
        Self::InvalidKey {
            key: key.escape_debug().to_string(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::InvalidField {
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotIndexed { .. } | Self::InvalidKey { .. } | Self::InvalidField { .. } => {
                ErrorKind::Configuration
            }
            Self::MissingBound { .. } | Self::ForeignToken { .. } | Self::Codec(_) => {
                ErrorKind::Validation
            }
            Self::UnsupportedPredicate { .. } => ErrorKind::Unsupported,
        }
    }
}
