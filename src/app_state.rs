//! Shared application state injected into the relay handlers.

use std::sync::Arc;

use crate::domain::Mailbox;
use crate::service::CommandService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Generic over the [`Mailbox`] so tests and alternative backends can be
/// injected without touching the routing code.
#[derive(Debug)]
pub struct AppState<M> {
    /// Command service for all mailbox traffic.
    pub command_service: CommandService<M>,
    /// Pre-rendered control page markup.
    pub control_page: Arc<str>,
}

impl<M: Mailbox> AppState<M> {
    /// Builds state around `mailbox` and an already rendered control page.
    #[must_use]
    pub fn new(mailbox: Arc<M>, control_page: impl Into<Arc<str>>) -> Self {
        Self {
            command_service: CommandService::new(mailbox),
            control_page: control_page.into(),
        }
    }
}

impl<M> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            command_service: self.command_service.clone(),
            control_page: Arc::clone(&self.control_page),
        }
    }
}
