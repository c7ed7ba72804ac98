//! Domain layer: device identity, command tokens, and the mailbox store.
//!
//! The relay's entire state is a [`Mailbox`]: one pending [`Command`] per
//! [`DeviceId`], replaced on write and cleared on read.

pub mod command;
pub mod device_id;
pub mod mailbox;

pub use command::Command;
pub use device_id::DeviceId;
pub use mailbox::{InMemoryMailbox, Mailbox};
