//! # keyedfield codec
//!
//! Composite token encoding for keyed inverted-index fields.
//!
//! A keyed field stores many key/value pairs in one physical field by
//! turning each pair into a single token:
//!
//! ```text
//! key || 0x00 || canonical value
//! ```
//!
//! The encoding guarantees:
//! - Identical inputs produce identical bytes
//! - Tokens of one key never collide with, or prefix, tokens of another key
//! - Byte order groups tokens by key, then by canonical value string
//!
//! ## Usage
//!
//! ```
//! use keyedfield_codec::{decode_token, encode, Value};
//!
//! let token = encode("user.name", &Value::from("alice"));
//! assert_eq!(token.as_bytes(), b"user.name\0alice");
//!
//! let (key, value) = decode_token(token.as_bytes()).unwrap();
//! assert_eq!((key, value), ("user.name", "alice"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod value;

pub use decoder::{decode_token, extract_key, extract_value, split_token};
pub use encoder::{encode, encode_raw, key_prefix, CompositeToken, TokenEncoder, SEPARATOR};
pub use error::{CodecError, CodecResult};
pub use value::{Number, Value};

/// Returns true if `key` can be embedded in a token.
///
/// A valid key is non-empty and does not contain [`SEPARATOR`].
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.as_bytes().contains(&SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_.]{0,15}"
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        prop_oneof![
            ".{0,24}".prop_map(Value::Text),
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]
    }

    #[test]
    fn key_validation() {
        assert!(is_valid_key("key"));
        assert!(is_valid_key("a.b.c"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("bad\0key"));
    }

    proptest! {
        #[test]
        fn encoding_is_deterministic(key in key_strategy(), value in value_strategy()) {
            prop_assert_eq!(encode(&key, &value), encode(&key, &value.clone()));
        }

        #[test]
        fn tokens_decode_to_key_and_canonical_value(key in key_strategy(), value in value_strategy()) {
            let token = encode(&key, &value);
            let (k, v) = split_token(token.as_bytes()).unwrap();
            prop_assert_eq!(k, key.as_bytes());
            let canonical = value.canonical();
            prop_assert_eq!(v, canonical.as_bytes());
        }

        #[test]
        fn distinct_keys_never_prefix(
            k1 in key_strategy(),
            k2 in key_strategy(),
            v1 in value_strategy(),
            v2 in value_strategy(),
        ) {
            prop_assume!(k1 != k2);
            let t1 = encode(&k1, &v1);
            let t2 = encode(&k2, &v2);
            prop_assert!(!t2.starts_with(t1.as_bytes()));
            prop_assert!(!t1.starts_with(t2.as_bytes()));
            prop_assert!(!t1.starts_with(key_prefix(&k2).as_bytes()));
        }

        #[test]
        fn every_token_starts_with_its_key_prefix(key in key_strategy(), value in value_strategy()) {
            prop_assert!(encode(&key, &value).starts_with(key_prefix(&key).as_bytes()));
        }
    }
}
