//! # ornament-relay
//!
//! Remote-control relay between a browser control page and polling ESP8266
//! devices.
//!
//! The relay keeps one pending command per device. The control page (or any
//! HTTP client) queues a command; the device polls for it, and the poll
//! removes it. There is no persistence: each running instance owns its own
//! in-memory mailbox.
//!
//! ## Architecture
//!
//! ```text
//! Control page / RelayClient / device firmware
//!     │
//!     ├── dispatch (api/)      classify by method + final path segment
//!     │
//!     ├── CommandService (service/)
//!     │
//!     └── Mailbox (domain/)    one slot per DeviceId, read-once
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod telemetry;
