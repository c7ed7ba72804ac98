//! Opaque command payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command such as `"led1_on"` or `{"r":255,"g":0,"b":0}`.
///
/// Interpreted only by the device firmware; the relay stores any truthy
/// JSON value and hands it back verbatim. Serialized transparently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(Value);

impl Command {
    /// Builds a string `Command`, returning `None` for an empty token.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_value(Value::String(raw.to_string()))
    }

    /// Wraps a JSON value, returning `None` when it is falsy: `null`,
    /// `false`, `0` or `""`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        if is_truthy(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the token when the command is a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Returns the raw JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// JavaScript truthiness for a JSON value. Arrays and objects are always
/// truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}
