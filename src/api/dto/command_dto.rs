//! Command queueing and polling DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Command, DeviceId};
use crate::error::RelayError;

/// Field name carrying the device identifier in bodies and query strings.
pub const DEVICE_ID_FIELD: &str = "deviceId";
/// Field name carrying the command token in request bodies.
pub const COMMAND_FIELD: &str = "command";

/// Request body for `POST .../command`.
///
/// Parsed leniently from arbitrary JSON: a field that is absent or falsy
/// (`null`, `false`, `0`, `""`) is reported as missing. Any other value is
/// accepted; a non-string `deviceId` is keyed by its JavaScript string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueCommandRequest {
    /// Target device.
    pub device_id: Option<DeviceId>,
    /// Command to queue.
    pub command: Option<Command>,
}

impl QueueCommandRequest {
    /// Parses a raw request body. An empty body is read as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MalformedBody`] if a non-empty body is not
    /// valid JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value = parse_body(body)?;
        Ok(Self {
            device_id: value.get(DEVICE_ID_FIELD).and_then(DeviceId::from_value),
            command: value.get(COMMAND_FIELD).cloned().and_then(Command::from_value),
        })
    }

    /// Returns both fields, or [`RelayError::MissingFields`] if either is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MissingFields`] when `deviceId` or `command`
    /// is missing.
    pub fn into_parts(self) -> Result<(DeviceId, Command), RelayError> {
        match (self.device_id, self.command) {
            (Some(device_id), Some(command)) => Ok((device_id, command)),
            _ => Err(RelayError::MissingFields),
        }
    }
}

/// Response body for a successfully queued command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCommandResponse {
    /// Always `true`.
    pub success: bool,
    /// Always `"Command queued"`.
    pub message: String,
    /// Echo of the queued command.
    pub command: Command,
}

impl QueueCommandResponse {
    /// Builds the acknowledgement for `command`.
    #[must_use]
    pub fn queued(command: Command) -> Self {
        Self {
            success: true,
            message: "Command queued".to_string(),
            command,
        }
    }
}

/// Resolves the device id for a poll request.
///
/// A non-empty `deviceId` query parameter wins. Otherwise a non-empty body
/// is parsed as JSON and its `deviceId` field is used.
///
/// # Errors
///
/// Returns [`RelayError::MalformedBody`] if the query lacks a device id
/// and the body is not valid JSON.
pub fn resolve_device_id(
    query_device_id: Option<&str>,
    body: &[u8],
) -> Result<Option<DeviceId>, RelayError> {
    if let Some(id) = query_device_id.and_then(DeviceId::parse) {
        return Ok(Some(id));
    }
    if body.is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body)?;
    Ok(value.get(DEVICE_ID_FIELD).and_then(DeviceId::from_value))
}

/// Parses a request body as JSON, reading an empty body as `{}`.
///
/// # Errors
///
/// Returns [`RelayError::MalformedBody`] on invalid JSON.
pub fn parse_body(body: &[u8]) -> Result<Value, RelayError> {
    if body.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}
