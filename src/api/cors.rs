//! Static CORS headers attached to JSON and preflight responses.
//!
//! The relay is called cross-origin from the control page, so every JSON
//! response advertises a wildcard origin. The header set is fixed; there is
//! no per-origin negotiation.

use axum::http::HeaderMap;
use axum::http::header::{
    self, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue,
};

/// Allowed origin for every relay response.
pub const ALLOW_ORIGIN: &str = "*";
/// Request headers the browser may send.
pub const ALLOW_HEADERS: &str = "Content-Type";
/// Methods the relay answers.
pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
/// Content type of every non-HTML response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Inserts the full CORS header set plus a JSON content type.
pub fn apply_json(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
}

/// Inserts only the allowed origin plus a JSON content type.
pub fn apply_origin(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
}

/// Returns a fresh header map carrying [`apply_json`]'s headers.
#[must_use]
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);
    apply_json(&mut headers);
    headers
}
