//! Argument encoding
//!
//! Turns call arguments into JavaScript source text. JSON values go through
//! `serde_json`, literals are emitted as raw code.

mod escape;

pub use escape::{escape_html_entities, escape_single_quoted};

use crate::utils::{Result, RjsError};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single argument to a generated JavaScript call
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Encoded as JSON
    Json(Value),
    /// Raw JavaScript, emitted unquoted and unescaped
    Literal(String),
    /// A value with no JSON form, carrying its debug representation
    Inspect(String),
}

impl Argument {
    /// Raw JavaScript expression, e.g. a function literal or class reference
    pub fn literal(code: impl Into<String>) -> Self {
        Self::Literal(code.into())
    }

    /// Serialize any value into a JSON argument
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Capture a value's debug form for use where JSON is unavailable
    pub fn inspect<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Inspect(format!("{:?}", value))
    }

    /// Check if this argument is raw code
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Json(Value::String(value.to_string()))
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self::Json(Value::Bool(value))
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<f64> for Argument {
    /// Non-finite numbers become `null`, as `serde_json` does
    fn from(value: f64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Json(Value::Null))
    }
}

/// Options for the JSON encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Escape `<`, `>`, `&`, U+2028 and U+2029 inside JSON output
    pub escape_html_entities: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            escape_html_entities: true,
        }
    }
}

/// Encode an argument for a recorded statement.
///
/// `Inspect` values have no JSON form and are rejected.
pub fn encode(argument: &Argument, options: &EncoderOptions) -> Result<String> {
    match argument {
        Argument::Json(value) => encode_value(value, options),
        Argument::Literal(code) => Ok(code.clone()),
        Argument::Inspect(repr) => Err(RjsError::Unencodable(repr.clone())),
    }
}

/// Encode an argument inside a call chain.
///
/// Unlike [`encode`], falls back to the debug form instead of failing.
pub fn encode_for_chain(argument: &Argument, options: &EncoderOptions) -> String {
    match argument {
        Argument::Json(value) => {
            encode_value(value, options).unwrap_or_else(|_| value.to_string())
        }
        Argument::Literal(code) => code.clone(),
        Argument::Inspect(repr) => repr.clone(),
    }
}

/// Encode a JSON value
pub fn encode_value(value: &Value, options: &EncoderOptions) -> Result<String> {
    let json = serde_json::to_string(value)?;
    if options.escape_html_entities {
        Ok(escape_html_entities(&json))
    } else {
        Ok(json)
    }
}

/// Encode an argument list, comma-separated
pub fn encode_arguments(arguments: &[Argument], options: &EncoderOptions) -> Result<String> {
    let encoded = arguments
        .iter()
        .map(|argument| encode(argument, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(encoded.join(", "))
}

/// Encode a chain segment's argument list
pub fn encode_chain_arguments(arguments: &[Argument], options: &EncoderOptions) -> String {
    arguments
        .iter()
        .map(|argument| encode_for_chain(argument, options))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote a string the way a double-quoted JavaScript literal reads
pub fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
