//! Relay endpoint handlers, one per [`super::route::Route`].
//!
//! Handlers take the already-extracted request pieces and return either a
//! finished response or a [`crate::error::RelayError`].

pub mod command;
pub mod status;
pub mod system;

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::cors;

/// Serializes `body` as a 200 JSON response carrying the CORS header set.
pub(crate) fn json_reply<T: Serialize>(body: &T) -> Response {
    let mut response = Json(body).into_response();
    cors::apply_json(response.headers_mut());
    response
}
