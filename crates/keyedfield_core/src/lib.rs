//! # keyedfield core
//!
//! Keyed field types and query translation.
//!
//! This crate provides:
//! - Field configuration with a build-then-freeze lifecycle
//! - Translation of equality, membership, existence, prefix and range
//!   predicates into term-level queries over composite tokens
//! - Rejection of fuzzy, regexp and wildcard predicates
//! - Search-time analysis of free text
//!
//! ## Usage
//!
//! ```
//! use keyedfield_core::{FieldConfig, TermQuery, Value};
//!
//! let field = FieldConfig::new("user.name").name("attributes").build().unwrap();
//! let query = field.queries().term(&Value::from("alice")).unwrap();
//!
//! match query {
//!     TermQuery::Exact { field, token } => {
//!         assert_eq!(field, "attributes");
//!         assert_eq!(token.as_bytes(), b"user.name\0alice");
//!     }
//!     other => panic!("unexpected query {other:?}"),
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
mod config;
mod error;
mod field;
pub mod query;

pub use analysis::SearchAnalyzer;
pub use config::FieldConfig;
pub use error::{ErrorKind, QueryError, QueryResult};
pub use field::KeyedFieldType;
pub use keyedfield_codec::{CompositeToken, Number, Value};
pub use query::{
    Fuzziness, Predicate, PredicateKind, QueryFacade, QueryTranslator, RewriteMethod,
    TermQueries, TermQuery,
};

/// Family name of keyed fields, used in error messages.
pub const CONTENT_TYPE: &str = "json";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
