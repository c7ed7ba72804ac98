//! Single-slot-per-device pending command store.
//!
//! The [`Mailbox`] trait is the seam between the router and storage: the
//! router only ever replaces a device's slot or drains it. The default
//! [`InMemoryMailbox`] keeps every slot in a `HashMap` behind a
//! [`tokio::sync::RwLock`], so state lives exactly as long as the process.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use super::{Command, DeviceId};

/// Storage for at most one pending [`Command`] per [`DeviceId`].
///
/// Implementations must make [`Mailbox::take`] atomic with respect to
/// [`Mailbox::put`]: a command is handed out to exactly one reader.
pub trait Mailbox: Send + Sync + 'static {
    /// Stores `command` for `device_id`, replacing any pending command.
    ///
    /// Returns the command that was replaced, if any.
    fn put(
        &self,
        device_id: DeviceId,
        command: Command,
    ) -> impl Future<Output = Option<Command>> + Send;

    /// Removes and returns the pending command for `device_id`.
    fn take(&self, device_id: &DeviceId) -> impl Future<Output = Option<Command>> + Send;

    /// Returns the pending command for `device_id` without consuming it.
    fn peek(&self, device_id: &DeviceId) -> impl Future<Output = Option<Command>> + Send;

    /// Drops every pending command.
    fn clear(&self) -> impl Future<Output = ()> + Send;

    /// Returns the number of devices with a pending command.
    fn len(&self) -> impl Future<Output = usize> + Send;

    /// Returns `true` if no device has a pending command.
    fn is_empty(&self) -> impl Future<Output = bool> + Send {
        async move { self.len().await == 0 }
    }
}

/// Process-local [`Mailbox`] backed by a `RwLock<HashMap<..>>`.
///
/// Each running instance owns its own map; nothing is shared between
/// processes and nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryMailbox {
    slots: RwLock<HashMap<DeviceId, Command>>,
}

impl InMemoryMailbox {
    /// Creates an empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Mailbox for InMemoryMailbox {
    async fn put(&self, device_id: DeviceId, command: Command) -> Option<Command> {
        self.slots.write().await.insert(device_id, command)
    }

    async fn take(&self, device_id: &DeviceId) -> Option<Command> {
        self.slots.write().await.remove(device_id)
    }

    async fn peek(&self, device_id: &DeviceId) -> Option<Command> {
        self.slots.read().await.get(device_id).cloned()
    }

    async fn clear(&self) {
        self.slots.write().await.clear();
    }

    async fn len(&self) -> usize {
        self.slots.read().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn device(raw: &str) -> DeviceId {
        let Some(id) = DeviceId::parse(raw) else {
            panic!("valid device id");
        };
        id
    }

    fn command(raw: &str) -> Command {
        let Some(cmd) = Command::parse(raw) else {
            panic!("valid command");
        };
        cmd
    }

    #[tokio::test]
    async fn take_is_destructive() {
        let mailbox = InMemoryMailbox::new();
        let id = device("ESP8266_001");

        assert!(mailbox.put(id.clone(), command("led1_on")).await.is_none());
        assert_eq!(mailbox.take(&id).await, Some(command("led1_on")));
        assert_eq!(mailbox.take(&id).await, None);
    }

    #[tokio::test]
    async fn put_overwrites_pending_command() {
        let mailbox = InMemoryMailbox::new();
        let id = device("ESP8266_001");

        let _ = mailbox.put(id.clone(), command("led1_on")).await;
        let replaced = mailbox.put(id.clone(), command("both_off")).await;

        assert_eq!(replaced, Some(command("led1_on")));
        assert_eq!(mailbox.len().await, 1);
        assert_eq!(mailbox.take(&id).await, Some(command("both_off")));
    }

    #[tokio::test]
    async fn devices_have_independent_slots() {
        let mailbox = InMemoryMailbox::new();
        let _ = mailbox.put(device("a"), command("led1_on")).await;
        let _ = mailbox.put(device("b"), command("led2_on")).await;

        assert_eq!(mailbox.take(&device("a")).await, Some(command("led1_on")));
        assert_eq!(mailbox.peek(&device("b")).await, Some(command("led2_on")));
        assert_eq!(mailbox.len().await, 1);
    }

    #[tokio::test]
    async fn peek_does_not_consume() {
        let mailbox = InMemoryMailbox::new();
        let id = device("ESP8266_001");
        let _ = mailbox.put(id.clone(), command("led2_off")).await;

        assert_eq!(mailbox.peek(&id).await, Some(command("led2_off")));
        assert_eq!(mailbox.peek(&id).await, Some(command("led2_off")));
    }

    #[tokio::test]
    async fn clear_resets_every_slot() {
        let mailbox = InMemoryMailbox::new();
        let _ = mailbox.put(device("a"), command("led1_on")).await;
        let _ = mailbox.put(device("b"), command("led2_on")).await;
        assert!(!mailbox.is_empty().await);

        mailbox.clear().await;
        assert!(mailbox.is_empty().await);
        assert_eq!(mailbox.take(&device("a")).await, None);
    }

    #[tokio::test]
    async fn concurrent_readers_consume_once() {
        let mailbox = Arc::new(InMemoryMailbox::new());
        let id = device("ESP8266_001");
        let _ = mailbox.put(id.clone(), command("both_on")).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let mailbox = Arc::clone(&mailbox);
            let id = id.clone();
            handles.push(tokio::spawn(async move { mailbox.take(&id).await }));
        }

        let mut delivered = 0;
        for handle in handles {
            let Ok(result) = handle.await else {
                panic!("task panicked");
            };
            if result.is_some() {
                delivered += 1;
            }
        }
        assert_eq!(delivered, 1);
    }
}
