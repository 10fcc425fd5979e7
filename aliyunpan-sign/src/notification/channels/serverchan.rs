//! ServerChan (Server酱) notification channel.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::PushChannel;
use crate::Result;

const SERVERCHAN_URL_TEMPLATE: &str = "https://sctapi.ftqq.com/{sendkey}.send";

/// ServerChan channel configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerChanConfig {
    /// Send key (`SCT...`).
    pub send_key: String,
}

/// ServerChan notification channel.
pub struct ServerChanChannel {
    config: ServerChanConfig,
    client: Client,
}

impl ServerChanChannel {
    pub fn new(config: ServerChanConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn build_url(&self) -> String {
        SERVERCHAN_URL_TEMPLATE.replace("{sendkey}", &self.config.send_key)
    }

    fn build_form<'a>(title: &'a str, body: &'a str) -> [(&'static str, &'a str); 2] {
        [("title", title), ("desp", body)]
    }
}

#[async_trait]
impl PushChannel for ServerChanChannel {
    fn channel_type(&self) -> &'static str {
        "serverchan"
    }

    fn is_enabled(&self) -> bool {
        !self.config.send_key.is_empty()
    }

    async fn send(&self, title: &str, body: &str) -> Result<bool> {
        let response = self
            .client
            .post(self.build_url())
            .form(&Self::build_form(title, body))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            warn!("ServerChan push failed: {} - {}", status, text);
            return Ok(false);
        }

        debug!("ServerChan notification sent");
        Ok(true)
    }
}
