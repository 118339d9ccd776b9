//! Typed values and their canonical string form.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value that can be stored under a key.
///
/// Values have no byte representation of their own until they are
/// canonicalized with [`Value::canonical`]. Two values with the same
/// canonical string produce the same token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value, canonicalized as `true` / `false`.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Text value, passed through unchanged.
    Text(String),
}

/// A numeric value.
///
/// Serializes as a plain number, except non-finite floats, which are
/// written as their canonical strings (`NaN`, `Infinity`, `-Infinity`) and
/// read back from them. Inside an untagged [`Value`] those three strings
/// therefore read as floats; the token is the same either way.
///
/// Deserializing an unsigned integer above `i64::MAX` fails rather than
/// falling back to a float. Integer literals beyond the `u64` range are
/// handed over as floats by most JSON parsers and cannot be told apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer.
    Integer(i64),
    /// Double-precision float.
    Float(f64),
}

impl Value {
    /// Returns the canonical string for this value.
    ///
    /// The result is independent of locale and stable across releases,
    /// since it is embedded in every token written to an index.
    pub fn canonical(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.canonical(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
        }
    }

    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Number {
    /// Returns the canonical string for this number.
    ///
    /// Integers are plain base-10. Floats use the shortest decimal digits
    /// that round-trip to the same `f64`, always in positional notation,
    /// with `.0` appended when there is no fractional part. Non-finite
    /// floats are `NaN`, `Infinity` and `-Infinity`.
    pub fn canonical(&self) -> String {
        match *self {
            Number::Integer(n) => n.to_string(),
            Number::Float(f) => canonical_float(f),
        }
    }
}

fn canonical_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `Display` for f64 yields the shortest round-trip digits without an exponent.
    let mut s = f.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Integer(n) => serializer.serialize_i64(n),
            Number::Float(f) if f.is_finite() => serializer.serialize_f64(f),
            Number::Float(f) => serializer.serialize_str(&canonical_float(f)),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an i64, a float, or one of NaN, Infinity, -Infinity")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Number, E> {
        Ok(Number::Integer(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Number, E> {
        match i64::try_from(n) {
            Ok(n) => Ok(Number::Integer(n)),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(n), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Number, E> {
        Ok(Number::Float(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Number, E> {
        match s {
            "NaN" => Ok(Number::Float(f64::NAN)),
            "Infinity" => Ok(Number::Float(f64::INFINITY)),
            "-Infinity" => Ok(Number::Float(f64::NEG_INFINITY)),
            _ => Err(E::invalid_value(Unexpected::Str(s), &self)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Integer(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::Integer(i64::from(n)))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(Number::Integer(i64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f32> for Number {
    /// Widens through the shortest `f32` decimal so `2.718f32` stays `2.718`.
    fn from(n: f32) -> Self {
        let widened = if n.is_finite() {
            n.to_string().parse::<f64>().unwrap_or(f64::from(n))
        } else {
            f64::from(n)
        };
        Number::Float(widened)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
