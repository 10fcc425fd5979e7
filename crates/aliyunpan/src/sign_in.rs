//! Sign-in list and reward lookups.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::json;

use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::headers::member_headers;
use crate::models::{Reward, RewardResponse, SignInResponse};

/// Submit the daily check-in and fetch the sign-in ledger.
///
/// `access_token` is sent as the `Authorization` header value unchanged.
pub async fn sign_in_list(
    client: &Client,
    endpoints: &Endpoints,
    access_token: &str,
) -> Result<SignInResponse, ApiError> {
    let response = client
        .post(&endpoints.sign_in_list)
        .headers(member_headers())
        .header(AUTHORIZATION, access_token)
        .json(&json!({}))
        .send()
        .await?;

    let text = response.text().await?;
    tracing::debug!(body = %text, "Sign-in list response");

    let mut parsed: SignInResponse = serde_json::from_str(&text)?;
    parsed.raw = text;
    Ok(parsed)
}

/// Look up the reward granted for `day`.
pub async fn sign_in_reward(
    client: &Client,
    endpoints: &Endpoints,
    access_token: &str,
    day: u32,
) -> Result<Reward, ApiError> {
    let response = client
        .post(&endpoints.sign_in_reward)
        .headers(member_headers())
        .header(AUTHORIZATION, access_token)
        .json(&json!({ "signInDay": day }))
        .send()
        .await?;

    let text = response.text().await?;
    tracing::debug!(day, body = %text, "Sign-in reward response");

    let parsed: RewardResponse = serde_json::from_str(&text)?;
    parsed.into_reward()
}
