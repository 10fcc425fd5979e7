//! Fan-out of a message to the configured channels.

use reqwest::Client;
use tracing::{debug, info, warn};

use super::channels::{
    PushChannel, PushPlusChannel, PushPlusConfig, ServerChanChannel, ServerChanConfig,
};
use crate::config::AppConfig;

/// Result of dispatching to one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: &'static str,
    pub delivered: bool,
}

/// Sends a message to every enabled channel, in registration order.
pub struct Notifier {
    channels: Vec<Box<dyn PushChannel>>,
}

impl Notifier {
    pub fn new(channels: Vec<Box<dyn PushChannel>>) -> Self {
        Self { channels }
    }

    /// Build the channels configured in `config`: ServerChan first, then
    /// PushPlus. Channels without a secret are not registered.
    pub fn from_config(config: &AppConfig, client: Client) -> Self {
        let mut channels: Vec<Box<dyn PushChannel>> = Vec::new();

        if let Some(send_key) = &config.push_key {
            channels.push(Box::new(ServerChanChannel::new(
                ServerChanConfig {
                    send_key: send_key.clone(),
                },
                client.clone(),
            )));
        }

        if let Some(token) = &config.push_plus_token {
            channels.push(Box::new(PushPlusChannel::new(
                PushPlusConfig {
                    token: token.clone(),
                    ..Default::default()
                },
                client,
            )));
        }

        Self::new(channels)
    }

    /// Number of registered channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Dispatch `title`/`body` to each enabled channel.
    ///
    /// Failures are logged and do not stop the remaining channels; nothing is
    /// retried.
    pub async fn notify(&self, title: &str, body: &str) -> Vec<Delivery> {
        let mut deliveries = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            if !channel.is_enabled() {
                debug!(channel = channel.channel_type(), "Channel disabled, skipping");
                continue;
            }

            let delivered = match channel.send(title, body).await {
                Ok(true) => {
                    info!(channel = channel.channel_type(), "Notification sent");
                    true
                }
                Ok(false) => {
                    warn!(channel = channel.channel_type(), "Notification not accepted");
                    false
                }
                Err(e) => {
                    warn!(channel = channel.channel_type(), error = %e, "Notification failed");
                    false
                }
            };

            deliveries.push(Delivery {
                channel: channel.channel_type(),
                delivered,
            });
        }

        deliveries
    }
}
