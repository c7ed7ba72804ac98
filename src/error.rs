//! Relay error types with HTTP status code mapping.
//!
//! [`RelayError`] is the central error type for request handling. Each
//! variant maps to an HTTP status code and a flat JSON error body:
//!
//! ```json
//! { "error": "Missing deviceId or command" }
//! ```
//!
//! Internal failures never echo their detail to the caller; the detail is
//! logged and the body is always `{"error": "Internal server error"}`.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::api::cors;

/// JSON error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant         | HTTP Status               |
/// |-----------------|---------------------------|
/// | `MissingFields`  | 400 Bad Request           |
/// | `NotFound`       | 404 Not Found             |
/// | `UnreadableBody` | from the rejection (413 when over the body limit) |
/// | `MalformedBody`  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// `deviceId` or `command` was absent or falsy.
    #[error("Missing deviceId or command")]
    MissingFields,

    /// No route matched the request's method and path.
    #[error("Not found")]
    NotFound,

    /// Request body could not be read, usually because it exceeds
    /// [`crate::api::MAX_BODY_BYTES`].
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),

    /// Request body could not be parsed as JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl RelayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnreadableBody(rejection) => rejection.status(),
            Self::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for errors whose detail must stay server-side.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::MalformedBody(_))
    }

    /// Message placed in the response body.
    fn public_message(&self) -> String {
        if self.is_internal() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        let mut response = Json(body).into_response();
        *response.status_mut() = status;

        // 500s only advertise the origin.
        if self.is_internal() {
            cors::apply_origin(response.headers_mut());
        } else {
            cors::apply_json(response.headers_mut());
        }
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::header;

    use super::*;

    fn malformed() -> RelayError {
        match serde_json::from_str::<serde_json::Value>("{\"secret\": /var/lib") {
            Ok(value) => panic!("input must not parse: {value}"),
            Err(err) => RelayError::from(err),
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(RelayError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(malformed().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_keep_their_message() {
        assert_eq!(
            RelayError::MissingFields.public_message(),
            "Missing deviceId or command"
        );
        assert_eq!(RelayError::NotFound.public_message(), "Not found");
    }

    #[test]
    fn internal_detail_is_hidden() {
        let err = malformed();
        assert!(err.to_string().starts_with("malformed request body"));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn internal_response_only_allows_origin() {
        let response = malformed().into_response();
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&header::HeaderValue::from_static("*"))
        );
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).is_none());
        assert_eq!(
            headers.get(header::CONTENT_TYPE),
            Some(&header::HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn not_found_carries_full_cors() {
        let response = RelayError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some(&header::HeaderValue::from_static("GET,POST,OPTIONS"))
        );
    }
}
