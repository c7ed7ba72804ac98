//! HTTP layer: request classification, handlers, DTOs, and router
//! composition.
//!
//! Routes are not mounted at fixed paths. Every request lands in
//! [`dispatch`], which classifies it with [`Route::classify`] and hands it
//! to the matching handler.

pub mod cors;
pub mod dto;
pub mod handlers;
pub mod page;
pub mod route;

use std::collections::HashMap;

use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use tower_http::trace::TraceLayer;

pub use route::Route;

use crate::app_state::AppState;
use crate::domain::Mailbox;
use crate::error::RelayError;

/// Largest request body the relay will buffer. Larger bodies get a 413
/// JSON error with the usual CORS headers.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the relay router around `state`.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response through
/// `tracing`.
pub fn build_router<M: Mailbox>(state: AppState<M>) -> Router {
    Router::new()
        .fallback(dispatch::<M>)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Single entry point for every request.
///
/// Errors from the handlers are turned into their JSON error responses
/// here, so nothing escapes as an unhandled rejection.
pub async fn dispatch<M: Mailbox>(
    State(state): State<AppState<M>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let route = Route::classify(&method, uri.path());
    tracing::debug!(?route, %method, path = uri.path(), "dispatching request");

    let body = match body {
        Ok(body) => body,
        Err(rejection) => return RelayError::from(rejection).into_response(),
    };
    let result = match route {
        Route::Preflight => Ok(handlers::system::preflight()),
        Route::ControlPage => Ok(handlers::system::control_page(&state)),
        Route::FetchCommand => handlers::command::fetch_command(&state, &query, &body).await,
        Route::QueueCommand => handlers::command::queue_command(&state, &body).await,
        Route::ReportStatus => handlers::status::report_status(&state, &body),
        Route::NotFound => Err(RelayError::NotFound),
    };
    result.unwrap_or_else(IntoResponse::into_response)
}
