//! Composite token encoder.

use crate::value::Value;
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Serialize, Serializer};
use std::fmt;

/// Byte placed between the key and the canonical value.
///
/// `0x00` sorts below every other byte, so all tokens of a key form one
/// contiguous run starting at `key || 0x00`, and a key that is a prefix of
/// another key (`a` and `ab`) still sorts entirely before it.
pub const SEPARATOR: u8 = 0x00;

/// A `key || SEPARATOR || value` token.
///
/// Ordering is plain byte-lexicographic order over the encoded bytes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeToken(Bytes);

impl CompositeToken {
    /// Wraps raw token bytes without checking their shape.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Returns the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the token and returns the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Returns the length of the encoded token in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the token has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `prefix` is a prefix of this token.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl AsRef<[u8]> for CompositeToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CompositeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompositeToken({:?})", self.to_string())
    }
}

/// Writes UTF-8 text as-is. Control characters (the separator included)
/// and bytes that are not valid UTF-8 are written as `\xNN`, non-ASCII
/// control characters as `\u{..}`, and backslashes are doubled.
impl fmt::Display for CompositeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.utf8_chunks() {
            for c in chunk.valid().chars() {
                match c {
                    '\\' => f.write_str("\\\\")?,
                    c if c.is_ascii_control() => write!(f, "\\x{:02x}", u32::from(c))?,
                    c if c.is_control() => write!(f, "{}", c.escape_unicode())?,
                    c => write!(f, "{c}")?,
                }
            }
            for byte in chunk.invalid() {
                write!(f, "\\x{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

// Serialized as the display form, for human-readable output.
impl Serialize for CompositeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Encode a key and a typed value into a composite token.
///
/// The key must not contain [`SEPARATOR`]; field types validate this when
/// they are built. The value is not escaped.
pub fn encode(key: &str, value: &Value) -> CompositeToken {
    let mut encoder = TokenEncoder::for_key(key);
    encoder.push_value(value);
    encoder.finish()
}

/// Encode a key and an already-canonical value string.
///
/// Used for prefix queries, where the caller's prefix is matched against
/// canonical value strings rather than converted from a typed value.
pub fn encode_raw(key: &str, canonical: &str) -> CompositeToken {
    let mut encoder = TokenEncoder::for_key(key);
    encoder.push_str(canonical);
    encoder.finish()
}

/// Returns `key || SEPARATOR`, the prefix shared by every token of `key`.
pub fn key_prefix(key: &str) -> CompositeToken {
    TokenEncoder::for_key(key).finish()
}

/// Incremental builder for composite tokens.
///
/// The key and separator are written up front; value bytes are appended
/// afterwards.
pub struct TokenEncoder {
    buffer: BytesMut,
}

impl TokenEncoder {
    /// Create an encoder with `key || SEPARATOR` already written.
    pub fn for_key(key: &str) -> Self {
        let mut buffer = BytesMut::with_capacity(key.len() + 16);
        buffer.put_slice(key.as_bytes());
        buffer.put_u8(SEPARATOR);
        Self { buffer }
    }

    /// Append the canonical form of a value.
    pub fn push_value(&mut self, value: &Value) {
        match value {
            Value::Text(s) => self.push_str(s),
            other => self.push_str(&other.canonical()),
        }
    }

    /// Append raw text.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.put_slice(text.as_bytes());
    }

    /// Get a reference to the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume this encoder and return the token.
    pub fn finish(self) -> CompositeToken {
        CompositeToken(self.buffer.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_text() {
        let token = encode("key", &Value::from("value"));
        assert_eq!(token.as_bytes(), b"key\0value");
    }

    #[test]
    fn encode_float() {
        let token = encode("key", &Value::from(2.718));
        assert_eq!(token.as_bytes(), b"key\x002.718");
    }

    #[test]
    fn encode_bool() {
        let token = encode("key", &Value::from(true));
        assert_eq!(token.as_bytes(), b"key\0true");
    }

    #[test]
    fn encode_empty_value() {
        let token = encode("key", &Value::from(""));
        assert_eq!(token, key_prefix("key"));
    }

    #[test]
    fn raw_matches_typed_text() {
        assert_eq!(encode_raw("key", "val"), encode("key", &Value::from("val")));
    }

    #[test]
    fn prefix_key_sorts_before_longer_key() {
        let short = encode("a", &Value::from("zzz"));
        let long = encode("ab", &Value::from(""));
        assert!(short < long);
        assert!(!long.starts_with(key_prefix("a").as_bytes()));
    }

    #[test]
    fn tokens_order_by_value_within_key() {
        let lower = encode("key", &Value::from("apple"));
        let upper = encode("key", &Value::from("banana"));
        assert!(lower < upper);
    }

    #[test]
    fn incremental_encoder() {
        let mut encoder = TokenEncoder::for_key("k");
        assert_eq!(encoder.as_bytes(), b"k\0");
        encoder.push_value(&Value::from(7i64));
        assert_eq!(encoder.finish().as_bytes(), b"k\x007");
    }

    #[test]
    fn display_escapes_separator() {
        let token = encode("key", &Value::from("v"));
        assert_eq!(token.to_string(), "key\\x00v");
    }

    #[test]
    fn display_keeps_non_ascii_text() {
        let token = encode("key", &Value::from("caf\u{e9}"));
        assert_eq!(token.to_string(), "key\\x00caf\u{e9}");
    }

    #[test]
    fn display_escapes_control_and_invalid_bytes() {
        let token = CompositeToken::from_bytes(&b"k\0a\tb\\c\xff"[..]);
        assert_eq!(token.to_string(), "k\\x00a\\x09b\\\\c\\xff");
        let token = encode("k", &Value::from("\u{85}"));
        assert_eq!(token.to_string(), "k\\x00\\u{85}");
    }

    #[test]
    fn serializes_display_form() {
        let token = encode("key", &Value::from("caf\u{e9}"));
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"key\\\\x00caf\u{e9}\"");
        let back: String = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token.to_string());
    }
}
