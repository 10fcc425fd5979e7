//! Push notifications.
//!
//! Channels are consumed through a `send(title, body) -> delivered` contract;
//! the [`Notifier`] fans a message out to every enabled channel in order and
//! tolerates individual failures.

pub mod channels;
mod service;

pub use channels::{PushChannel, PushPlusChannel, PushPlusConfig, ServerChanChannel, ServerChanConfig};
pub use service::{Delivery, Notifier};
