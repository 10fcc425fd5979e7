//! Notification channels:
//! - ServerChan (`sctapi.ftqq.com`)
//! - PushPlus (`pushplus.plus`)

mod pushplus;
mod serverchan;

pub use pushplus::{PushPlusChannel, PushPlusConfig};
pub use serverchan::{ServerChanChannel, ServerChanConfig};

use async_trait::async_trait;

use crate::Result;

/// Trait for push channels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Get the channel type name.
    fn channel_type(&self) -> &'static str;

    /// A channel is enabled when its secret is configured.
    fn is_enabled(&self) -> bool;

    /// Send a message.
    ///
    /// `Ok(true)` means the provider answered HTTP 200, `Ok(false)` any other
    /// status; transport failures are errors.
    async fn send(&self, title: &str, body: &str) -> Result<bool>;
}
