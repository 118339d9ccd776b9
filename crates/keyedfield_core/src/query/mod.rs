//! Predicates, query primitives and the translator between them.
//!
//! Keyed fields do not execute queries. They turn a [`Predicate`] into a
//! primitive built by a [`QueryFacade`], which the index engine runs.
//!
//! # Primitives
//!
//! - exact match on one token
//! - set membership over many tokens
//! - prefix match, anchored at `key || 0x00`
//! - range match, with both bounds inside one key
//!
//! Fuzzy, regexp and wildcard predicates are rejected, since they cannot
//! be confined to the value portion of a token.

mod facade;
mod predicate;
mod term;
mod translator;

pub use facade::QueryFacade;
pub use predicate::{Fuzziness, Predicate, PredicateKind};
pub use term::{RewriteMethod, TermQueries, TermQuery};
pub use translator::QueryTranslator;
