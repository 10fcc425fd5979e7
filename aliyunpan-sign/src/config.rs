//! Startup configuration.
//!
//! Everything is read from the environment once (optionally seeded from a
//! `.env` file) and passed down explicitly; nothing below this module reads
//! environment variables.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::{Error, Result};

/// Refresh token(s) of the accounts to sign in. Required.
pub const REFRESH_TOKEN_ENV: &str = "aliyunpan_refresh_token";
/// ServerChan send key.
pub const PUSH_KEY_ENV: &str = "PUSH_KEY";
/// PushPlus user token.
pub const PUSH_PLUS_TOKEN_ENV: &str = "PUSH_PLUS_TOKEN";
/// Reward lookup policy (`always` or `embedded`).
pub const REWARD_POLICY_ENV: &str = "ALIYUNPAN_REWARD_POLICY";

/// Log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";
/// Log file name inside [`DEFAULT_LOG_DIR`].
pub const DEFAULT_LOG_FILE: &str = "aliyunpan.log";

/// How the reward of a signed day is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RewardPolicy {
    /// Query the reward endpoint for every signed day, ignoring any reward
    /// embedded in the ledger.
    #[default]
    AlwaysFetch,
    /// Reuse the embedded reward when the ledger marks the day as rewarded and
    /// only query the endpoint for the other days.
    PreferEmbedded,
}

impl FromStr for RewardPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "always" | "fetch" => Ok(Self::AlwaysFetch),
            "embedded" | "prefer-embedded" => Ok(Self::PreferEmbedded),
            other => Err(Error::config(format!("unknown reward policy: {other}"))),
        }
    }
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Refresh tokens, one per account, in processing order.
    pub accounts: Vec<String>,
    /// ServerChan send key.
    pub push_key: Option<String>,
    /// PushPlus token.
    pub push_plus_token: Option<String>,
    pub reward_policy: RewardPolicy,
}

impl AppConfig {
    /// Build a configuration for `accounts` with no push channel and default
    /// settings.
    pub fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            push_key: None,
            push_plus_token: None,
            reward_policy: RewardPolicy::default(),
        }
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Fails only when no refresh token is configured.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(REFRESH_TOKEN_ENV).ok_or_else(|| {
            Error::config(format!(
                "{REFRESH_TOKEN_ENV} is not set; add the Aliyun Drive refresh_token to the environment"
            ))
        })?;

        let accounts = split_accounts(&raw);
        if accounts.is_empty() {
            return Err(Error::config(format!("{REFRESH_TOKEN_ENV} is empty")));
        }

        let mut config = Self::new(accounts);
        config.push_key = non_empty(lookup(PUSH_KEY_ENV));
        config.push_plus_token = non_empty(lookup(PUSH_PLUS_TOKEN_ENV));

        if let Some(policy) = lookup(REWARD_POLICY_ENV) {
            match policy.parse() {
                Ok(parsed) => config.reward_policy = parsed,
                Err(e) => warn!(error = %e, "Ignoring {REWARD_POLICY_ENV}, using default"),
            }
        }

        Ok(config)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("accounts", &self.accounts.len())
            .field("push_key", &self.push_key.as_ref().map(|_| "<redacted>"))
            .field(
                "push_plus_token",
                &self.push_plus_token.as_ref().map(|_| "<redacted>"),
            )
            .field("reward_policy", &self.reward_policy)
            .finish()
    }
}

/// Split a multi-account token string.
///
/// An ASCII comma wins if present; otherwise a full-width comma is tried;
/// otherwise the whole value is a single token. Entries are trimmed and empty
/// ones dropped.
pub fn split_accounts(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else if raw.contains('，') {
        raw.split('，').collect()
    } else {
        vec![raw]
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
