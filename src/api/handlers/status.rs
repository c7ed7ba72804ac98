//! Device status handler.

use axum::response::Response;

use super::json_reply;
use crate::api::dto::{StatusAckResponse, parse_body};
use crate::app_state::AppState;
use crate::domain::Mailbox;
use crate::error::RelayError;

/// `POST .../status` — Accept a device status report.
///
/// The payload is arbitrary JSON; it is logged and acknowledged, never
/// stored.
///
/// # Errors
///
/// Returns [`RelayError::MalformedBody`] if the body is not valid JSON.
pub fn report_status<M: Mailbox>(state: &AppState<M>, body: &[u8]) -> Result<Response, RelayError> {
    let status = parse_body(body)?;
    state.command_service.record_status(&status);
    Ok(json_reply(&StatusAckResponse::received()))
}
