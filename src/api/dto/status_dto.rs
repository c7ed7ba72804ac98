//! Device status report DTOs.

use serde::{Deserialize, Serialize};

/// Response body for `POST .../status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAckResponse {
    /// Always `true`.
    pub success: bool,
    /// Always `"Status received"`.
    pub message: String,
}

impl StatusAckResponse {
    /// Builds the acknowledgement returned for every status report.
    #[must_use]
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Status received".to_string(),
        }
    }
}
