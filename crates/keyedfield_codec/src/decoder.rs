//! Composite token decoder.

use crate::encoder::SEPARATOR;
use crate::error::{CodecError, CodecResult};

/// Split a token into its key and value bytes.
///
/// The split happens at the first separator byte. Keys never contain the
/// separator, so the boundary is unambiguous even if the value does.
pub fn split_token(token: &[u8]) -> CodecResult<(&[u8], &[u8])> {
    let pos = token
        .iter()
        .position(|&b| b == SEPARATOR)
        .ok_or(CodecError::MissingSeparator)?;
    Ok((&token[..pos], &token[pos + 1..]))
}

/// Decode a token into its key and canonical value string.
pub fn decode_token(token: &[u8]) -> CodecResult<(&str, &str)> {
    let (key, value) = split_token(token)?;
    let key = std::str::from_utf8(key).map_err(|_| CodecError::invalid_utf8("key"))?;
    let value = std::str::from_utf8(value).map_err(|_| CodecError::invalid_utf8("value"))?;
    Ok((key, value))
}

/// Returns the key portion of a token.
pub fn extract_key(token: &[u8]) -> CodecResult<&str> {
    decode_token(token).map(|(key, _)| key)
}

/// Returns the canonical value portion of a token.
pub fn extract_value(token: &[u8]) -> CodecResult<&str> {
    decode_token(token).map(|(_, value)| value)
}
