//! Type-safe device identifier.
//!
//! [`DeviceId`] is a newtype wrapper around the opaque string a device (or
//! the control page) sends as `deviceId`. It keeps identifiers from being
//! confused with command tokens when both travel as plain strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::command::is_truthy;

/// Opaque client-supplied identifier correlating command writes and reads.
///
/// Never empty: an empty `deviceId` is treated the same as a missing one.
/// Used as the key of the [`super::Mailbox`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Builds a `DeviceId`, returning `None` for an empty string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    /// Builds a `DeviceId` from a JSON body field.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) yield `None`. Any other
    /// value is keyed by its JavaScript string form, so `42` and `"42"`
    /// address the same slot. Values whose string form is empty (`[]`)
    /// also yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if is_truthy(value) {
            Self::parse(&js_string(value))
        } else {
            None
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `String(value)` as JavaScript computes it for a parsed JSON value.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral numbers print without a fractional part (`42.0` is `"42"`).
fn js_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
