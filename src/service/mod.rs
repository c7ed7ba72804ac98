//! Service layer: business logic orchestration.
//!
//! [`CommandService`] is the single entry point for all mailbox
//! mutations and the place where device traffic is logged.

pub mod command_service;

pub use command_service::CommandService;
