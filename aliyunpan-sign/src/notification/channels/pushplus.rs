//! PushPlus notification channel.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::PushChannel;
use crate::Result;

const PUSHPLUS_URL: &str = "http://www.pushplus.plus/send";

/// PushPlus channel configuration.
#[derive(Debug, Clone)]
pub struct PushPlusConfig {
    /// User token.
    pub token: String,
    /// Rendering template (default: markdown).
    pub template: String,
}

fn default_template() -> String {
    "markdown".to_string()
}

impl Default for PushPlusConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            template: default_template(),
        }
    }
}

/// PushPlus notification channel.
pub struct PushPlusChannel {
    config: PushPlusConfig,
    client: Client,
}

impl PushPlusChannel {
    pub fn new(config: PushPlusConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn build_form<'a>(&'a self, title: &'a str, body: &'a str) -> [(&'static str, &'a str); 4] {
        [
            ("token", self.config.token.as_str()),
            ("title", title),
            ("content", body),
            ("template", self.config.template.as_str()),
        ]
    }
}

#[async_trait]
impl PushChannel for PushPlusChannel {
    fn channel_type(&self) -> &'static str {
        "pushplus"
    }

    fn is_enabled(&self) -> bool {
        !self.config.token.is_empty()
    }

    async fn send(&self, title: &str, body: &str) -> Result<bool> {
        let response = self
            .client
            .post(PUSHPLUS_URL)
            .form(&self.build_form(title, body))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            warn!("PushPlus push failed: {} - {}", status, text);
            return Ok(false);
        }

        debug!("PushPlus notification sent");
        Ok(true)
    }
}
