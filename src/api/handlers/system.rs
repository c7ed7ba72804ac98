//! Routing-level endpoints: CORS preflight and the control page.

use axum::http::StatusCode;
use axum::http::header::{self, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::api::cors;
use crate::app_state::AppState;

/// `OPTIONS *` — CORS preflight. Empty body, full CORS header set.
#[must_use]
pub fn preflight() -> Response {
    (StatusCode::OK, cors::json_headers()).into_response()
}

/// `GET /` or `GET .../device` — The control page.
///
/// Carries `Content-Type: text/html` and no CORS headers.
#[must_use]
pub fn control_page<M>(state: &AppState<M>) -> Response {
    let mut response = state.control_page.to_string().into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    response
}
