//! Request classification by method and final path segment.
//!
//! The relay does not mount fixed paths: a device may be pointed at any
//! prefix (`/device/commands`, `/prod/esp/commands`, ...). Only the last
//! `/`-separated segment of the path and the HTTP method decide which
//! handler runs.

use axum::http::Method;

/// The handler a request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `OPTIONS` on any path.
    Preflight,
    /// `GET /`, `GET .../` or `GET .../device`.
    ControlPage,
    /// `GET .../commands`: destructive read of a device's pending command.
    FetchCommand,
    /// `POST .../command`: queue a command for a device.
    QueueCommand,
    /// `POST .../status`: log-only device status report.
    ReportStatus,
    /// Anything else.
    NotFound,
}

impl Route {
    /// Classifies a request. Rules are evaluated first-match, top to bottom.
    #[must_use]
    pub fn classify(method: &Method, path: &str) -> Self {
        let endpoint = final_segment(path);

        if *method == Method::OPTIONS {
            Self::Preflight
        } else if *method == Method::GET
            && (path == "/" || endpoint.is_empty() || endpoint == "device")
        {
            Self::ControlPage
        } else if *method == Method::GET && endpoint == "commands" {
            Self::FetchCommand
        } else if *method == Method::POST && endpoint == "command" {
            Self::QueueCommand
        } else if *method == Method::POST && endpoint == "status" {
            Self::ReportStatus
        } else {
            Self::NotFound
        }
    }
}

/// Returns everything after the last `/` in `path` (the whole path when it
/// contains none).
#[must_use]
pub fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
