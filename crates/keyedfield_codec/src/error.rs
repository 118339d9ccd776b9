//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding composite tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The token has no separator byte between key and value.
    #[error("token has no key separator")]
    MissingSeparator,

    /// The key or value portion of a token is not valid UTF-8.
    #[error("invalid UTF-8 in token {part}")]
    InvalidUtf8 {
        /// Which portion of the token failed ("key" or "value").
        part: &'static str,
    },
}

impl CodecError {
    /// Create an invalid UTF-8 error for the given token portion.
    pub fn invalid_utf8(part: &'static str) -> Self {
        Self::InvalidUtf8 { part }
    }
}
