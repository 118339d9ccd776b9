//! Token encoding test vectors.
//!
//! Tokens are persisted by the index engine, so their bytes must never
//! change between releases. These vectors pin them.

use keyedfield_core::Value;
use serde::{Deserialize, Serialize};

/// A pinned encoding of one key/value pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Key to encode under.
    pub key: String,
    /// Value to encode.
    pub value: Value,
    /// Expected token bytes (hex-encoded).
    pub expected_hex: String,
}

fn vector(id: &str, description: &str, key: &str, value: Value, expected: &[u8]) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        key: key.into(),
        value,
        expected_hex: hex_encode(expected),
    }
}

/// Token encoding vectors.
pub fn encoding_vectors() -> Vec<TestVector> {
    vec![
        vector("text", "Text value", "key", Value::from("value"), b"key\0value"),
        vector("text_empty", "Empty text value", "key", Value::from(""), b"key\0"),
        vector(
            "text_utf8",
            "Non-ASCII text value",
            "key",
            Value::from("caf\u{e9}"),
            "key\0caf\u{e9}".as_bytes(),
        ),
        vector("float", "Float value", "key", Value::from(2.718), b"key\x002.718"),
        vector("float_integral", "Integral float keeps .0", "key", Value::from(3.0), b"key\x003.0"),
        vector("float_neg_zero", "Negative zero", "key", Value::from(-0.0), b"key\0-0.0"),
        vector("float_nan", "NaN", "key", Value::from(f64::NAN), b"key\0NaN"),
        vector("float_inf", "Positive infinity", "key", Value::from(f64::INFINITY), b"key\0Infinity"),
        vector(
            "float_neg_inf",
            "Negative infinity",
            "key",
            Value::from(f64::NEG_INFINITY),
            b"key\0-Infinity",
        ),
        vector("integer", "Integer value", "key", Value::from(42i64), b"key\x0042"),
        vector("integer_neg", "Negative integer", "key", Value::from(-42i64), b"key\0-42"),
        vector("bool_true", "Boolean true", "key", Value::from(true), b"key\0true"),
        vector("bool_false", "Boolean false", "key", Value::from(false), b"key\0false"),
        vector(
            "dotted_key",
            "Flattened attribute path",
            "user.name",
            Value::from("alice"),
            b"user.name\0alice",
        ),
    ]
}

/// Encodes bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes hexadecimal string to bytes.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    let hex = hex.replace([' ', '\n', '\r'], "");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Invalid hex"))
        .collect()
}

/// Generate all test vectors as JSON.
pub fn all_vectors_json() -> String {
    serde_json::to_string_pretty(&encoding_vectors()).expect("Failed to serialize vectors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyedfield_codec::encode;

    #[test]
    fn test_encoding_vectors() {
        for vector in encoding_vectors() {
            let token = encode(&vector.key, &vector.value);
            assert_eq!(
                hex_encode(token.as_bytes()),
                vector.expected_hex,
                "Vector {} failed: {}",
                vector.id,
                vector.description
            );
        }
    }

    #[test]
    fn test_hex_helpers() {
        assert_eq!(hex_encode(b"k\0v"), "6b0076");
        assert_eq!(hex_decode("6b 00 76"), b"k\0v");
    }

    #[test]
    fn test_all_vectors_json() {
        let json = all_vectors_json();
        assert!(json.contains("\"id\": \"float\""));
        assert!(json.contains("\"value\": 2.718"));
        assert!(json.contains("\"value\": \"NaN\""));
    }

    #[test]
    fn test_vectors_json_reloads() {
        let vectors: Vec<TestVector> = serde_json::from_str(&all_vectors_json()).unwrap();
        assert_eq!(vectors.len(), encoding_vectors().len());
        for vector in vectors {
            let token = encode(&vector.key, &vector.value);
            assert_eq!(
                hex_encode(token.as_bytes()),
                vector.expected_hex,
                "Vector {} failed after reload: {}",
                vector.id,
                vector.description
            );
        }
    }
}
