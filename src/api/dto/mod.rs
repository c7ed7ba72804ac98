//! Data Transfer Objects for request parsing and response serialization.
//!
//! Field names follow the device firmware's camelCase wire format
//! (`deviceId`), so request bodies are read field-by-field from
//! `serde_json::Value` instead of through a derived struct.

pub mod command_dto;
pub mod status_dto;

pub use command_dto::*;
pub use status_dto::*;
