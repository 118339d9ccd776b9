//! CLI command implementations.

pub mod decode;
pub mod encode;
pub mod translate;

use clap::ValueEnum;
use keyedfield_core::Value;

/// How a command-line argument is read as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// Plain text.
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Double-precision float.
    Float,
    /// `true` or `false`.
    Bool,
}

impl ValueType {
    /// Parses `raw` as a value of this type.
    pub fn parse(self, raw: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let value = match self {
            ValueType::Text => Value::from(raw),
            ValueType::Integer => Value::from(raw.parse::<i64>()?),
            ValueType::Float => Value::from(raw.parse::<f64>()?),
            ValueType::Bool => Value::from(raw.parse::<bool>()?),
        };
        Ok(value)
    }
}
