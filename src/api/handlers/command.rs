//! Command handlers: device polling and command queueing.

use std::collections::HashMap;

use axum::response::Response;

use super::json_reply;
use crate::api::dto::{
    DEVICE_ID_FIELD, QueueCommandRequest, QueueCommandResponse, resolve_device_id,
};
use crate::app_state::AppState;
use crate::domain::Mailbox;
use crate::error::RelayError;

/// `GET .../commands?deviceId=...` — Destructive read of a pending command.
///
/// Responds with the pending command exactly as it was queued (usually a
/// JSON string), or `null` when the device has nothing queued. The command
/// is removed before the response is built, so a second poll sees `null`.
///
/// # Errors
///
/// Returns [`RelayError::MalformedBody`] if the device id has to come from
/// the body and the body is not valid JSON.
pub async fn fetch_command<M: Mailbox>(
    state: &AppState<M>,
    query: &HashMap<String, String>,
    body: &[u8],
) -> Result<Response, RelayError> {
    let device_id = resolve_device_id(query.get(DEVICE_ID_FIELD).map(String::as_str), body)?;
    let command = state.command_service.deliver(device_id.as_ref()).await;
    Ok(json_reply(&command))
}

/// `POST .../command` — Queue a command for a device.
///
/// # Errors
///
/// Returns [`RelayError::MalformedBody`] on invalid JSON and
/// [`RelayError::MissingFields`] if `deviceId` or `command` is missing.
pub async fn queue_command<M: Mailbox>(
    state: &AppState<M>,
    body: &[u8],
) -> Result<Response, RelayError> {
    let (device_id, command) = QueueCommandRequest::from_body(body)?.into_parts()?;
    state.command_service.queue(device_id, command.clone()).await;
    Ok(json_reply(&QueueCommandResponse::queued(command)))
}
