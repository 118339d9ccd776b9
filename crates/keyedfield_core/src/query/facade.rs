//! The query constructors exposed by an index engine.

use keyedfield_codec::CompositeToken;

/// Byte-oriented query constructors of an index engine.
///
/// Implementations know nothing about composite tokens; they build
/// primitives over raw bytes with byte-lexicographic semantics. The
/// translator is generic over this trait so that any engine can plug its
/// own query type in.
pub trait QueryFacade {
    /// Query primitive produced by the engine.
    type Query;

    /// Rewrite strategy for multi-term queries, forwarded untouched.
    type Rewrite;

    /// Matches exactly one token.
    fn exact_match(&self, field: &str, token: CompositeToken) -> Self::Query;

    /// Matches any of the given tokens. An empty set matches nothing.
    fn set_membership(&self, field: &str, tokens: Vec<CompositeToken>) -> Self::Query;

    /// Matches every token starting with `prefix`.
    fn prefix_match(
        &self,
        field: &str,
        prefix: CompositeToken,
        rewrite: Option<Self::Rewrite>,
    ) -> Self::Query;

    /// Matches tokens between `low` and `high`.
    fn range_match(
        &self,
        field: &str,
        low: CompositeToken,
        high: CompositeToken,
        include_low: bool,
        include_high: bool,
    ) -> Self::Query;
}
