//! Command service: queues, delivers, and logs device traffic.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{Command, DeviceId, Mailbox};

/// Orchestration layer over a [`Mailbox`].
///
/// Stateless coordinator: all state lives in the injected mailbox. Every
/// method performs a single mailbox operation, so a request can never
/// observe a half-applied write.
#[derive(Debug)]
pub struct CommandService<M> {
    mailbox: Arc<M>,
}

impl<M> Clone for CommandService<M> {
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}

impl<M: Mailbox> CommandService<M> {
    /// Creates a new `CommandService` over `mailbox`.
    #[must_use]
    pub fn new(mailbox: Arc<M>) -> Self {
        Self { mailbox }
    }

    /// Stores `command` as the pending command for `device_id`, replacing
    /// whatever was queued before.
    pub async fn queue(&self, device_id: DeviceId, command: Command) {
        let replaced = self.mailbox.put(device_id.clone(), command.clone()).await;
        tracing::info!(
            device_id = %device_id,
            command = %command,
            replaced = replaced.as_ref().map(tracing::field::display),
            "command queued"
        );
    }

    /// Removes and returns the pending command for `device_id`.
    ///
    /// A poll without a device id never matches a slot and yields `None`.
    pub async fn deliver(&self, device_id: Option<&DeviceId>) -> Option<Command> {
        let device_id = device_id?;
        let command = self.mailbox.take(device_id).await;
        match &command {
            Some(command) => {
                tracing::info!(device_id = %device_id, command = %command, "command delivered");
            }
            None => tracing::debug!(device_id = %device_id, "no pending command"),
        }
        command
    }

    /// Logs a device status report. Nothing is stored.
    pub fn record_status(&self, status: &Value) {
        tracing::info!(status = %status, "device status received");
    }
}
