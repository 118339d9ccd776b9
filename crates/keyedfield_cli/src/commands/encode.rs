//! Encode command implementation.

use crate::commands::ValueType;
use keyedfield_codec::{encode, is_valid_key};
use serde::Serialize;
use tracing::debug;

/// Encoding result.
#[derive(Debug, Serialize)]
pub struct EncodeResult {
    /// Key the value was encoded under.
    pub key: String,
    /// Canonical value string.
    pub canonical: String,
    /// Token with non-printable bytes escaped.
    pub token: String,
    /// Token bytes, hex-encoded.
    pub hex: String,
}

/// Runs the encode command.
pub fn run(
    key: &str,
    raw: &str,
    value_type: ValueType,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !is_valid_key(key) {
        return Err(format!("invalid key {:?}", key).into());
    }
    let value = value_type.parse(raw)?;
    debug!(key, ?value, "encoding value");

    let token = encode(key, &value);
    let result = EncodeResult {
        key: key.to_string(),
        canonical: value.canonical(),
        token: token.to_string(),
        hex: super::decode::hex_encode(token.as_bytes()),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("Key:       {}", result.key);
            println!("Canonical: {}", result.canonical);
            println!("Token:     {}", result.token);
            println!("Hex:       {}", result.hex);
        }
    }

    Ok(())
}
