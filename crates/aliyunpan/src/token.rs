//! Refresh-token exchange.

use reqwest::Client;
use serde_json::json;

use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::headers::token_headers;
use crate::models::TokenInfo;

/// Exchange a long-lived refresh token for an access token.
///
/// The HTTP status is not inspected: the service reports failures in the body,
/// which deserializes into a [`TokenInfo`] with an empty `access_token`.
pub async fn refresh_token(
    client: &Client,
    endpoints: &Endpoints,
    refresh_token: &str,
) -> Result<TokenInfo, ApiError> {
    let body = json!({
        "refresh_token": refresh_token,
        "grant_type": "refresh_token",
    });

    let response = client
        .post(&endpoints.token)
        .headers(token_headers())
        .json(&body)
        .send()
        .await?;

    let text = response.text().await?;
    tracing::debug!(body = %text, "Token refresh response");

    let info: TokenInfo = serde_json::from_str(&text)?;
    Ok(info)
}
