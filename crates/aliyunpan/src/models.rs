//! Response models for the token and sign-in endpoints.

use serde::Deserialize;

use crate::de::{lenient_optional_string, lenient_string, null_as_default, present_or_null};
use crate::error::ApiError;

/// Code returned by the member endpoints when the bearer token is rejected.
pub const ACCESS_TOKEN_INVALID: &str = "AccessTokenInvalid";

/// Body of `POST /v2/account/token`.
///
/// Every field defaults to empty; an empty `access_token` is how the caller
/// learns that the exchange failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub access_token: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub refresh_token: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expire_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nick_name: String,
    /// Error code, only present on failures.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub message: Option<String>,
}

impl TokenInfo {
    #[inline]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Body of `POST /v1/activity/sign_in_list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInResponse {
    /// `None` (absent or `null`) means success.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: SignInResult,
    /// Raw response text, kept for diagnostics.
    #[serde(skip)]
    pub raw: String,
}

impl SignInResponse {
    pub fn is_access_token_invalid(&self) -> bool {
        self.code.as_deref() == Some(ACCESS_TOKEN_INVALID)
    }
}

/// The sign-in ledger for the current cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sign_in_logs: Vec<SignInRecord>,
    /// Current streak length.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sign_in_count: u32,
}

/// One day of the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: u32,
    /// `None` when the service sends an explicit `null`; a missing field
    /// reads as the empty string, which marks the record as malformed.
    #[serde(default = "missing_status", deserialize_with = "lenient_optional_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_reward: bool,
    #[serde(default)]
    pub reward: Option<Reward>,
}

impl SignInRecord {
    pub fn status(&self) -> SignInStatus {
        match self.status.as_deref() {
            Some(status) => SignInStatus::from(status),
            None => SignInStatus::Null,
        }
    }
}

fn missing_status() -> Option<String> {
    Some(String::new())
}

/// Status of a ledger day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInStatus {
    /// Checked in.
    Normal,
    /// Day was missed.
    Miss,
    /// Status missing or empty; the record is malformed.
    Empty,
    /// Status explicitly `null`; the record carries nothing to report.
    Null,
    /// Anything else the service may introduce.
    Other(String),
}

impl From<&str> for SignInStatus {
    fn from(value: &str) -> Self {
        match value {
            "" => Self::Empty,
            "normal" => Self::Normal,
            "miss" => Self::Miss,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A sign-in reward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Reward {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

impl Reward {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Placeholder for a day without a reward.
    pub fn none() -> Self {
        Self::new("无奖励", "")
    }

    /// Placeholder for a reward whose lookup failed.
    pub fn unavailable() -> Self {
        Self::new("null", "null")
    }
}

/// Body of `POST /v1/activity/sign_in_reward`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardResponse {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub message: Option<String>,
    /// `None` when absent, `Some(None)` when explicitly `null`.
    #[serde(default, deserialize_with = "present_or_null")]
    pub result: Option<Option<Reward>>,
}

impl RewardResponse {
    /// The reward, with name and description empty when `result` is absent.
    ///
    /// An explicit `"result": null` is what the service sends on errors and
    /// is reported as [`ApiError::MissingResult`].
    pub fn into_reward(self) -> Result<Reward, ApiError> {
        match self.result {
            None => Ok(Reward::default()),
            Some(Some(reward)) => Ok(reward),
            Some(None) => Err(ApiError::MissingResult {
                code: self.code.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            }),
        }
    }
}
