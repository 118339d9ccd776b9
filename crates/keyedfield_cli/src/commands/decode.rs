//! Decode command implementation.

use keyedfield_codec::decode_token;
use serde::Serialize;

/// Decoding result.
#[derive(Debug, Serialize)]
pub struct DecodeResult {
    /// Key portion of the token.
    pub key: String,
    /// Canonical value portion of the token.
    pub value: String,
}

/// Runs the decode command on a hex-encoded token.
pub fn run(hex: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = hex_decode(hex)?;
    let (key, value) = decode_token(&bytes)?;
    let result = DecodeResult {
        key: key.to_string(),
        value: value.to_string(),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("Key:   {}", result.key);
            println!("Value: {}", result.value);
        }
    }

    Ok(())
}

/// Encodes bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes a hexadecimal string, ignoring whitespace.
pub fn hex_decode(hex: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let hex: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return Err(format!("invalid hex string {:?}", hex).into());
    }
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        bytes.push(u8::from_str_radix(&hex[i..i + 2], 16)?);
    }
    Ok(bytes)
}
