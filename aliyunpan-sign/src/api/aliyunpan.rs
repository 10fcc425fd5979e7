//! HTTP implementation of [`AliyunpanApi`].

use aliyunpan_api::{ApiError, Endpoints, Reward, SignInResponse, TokenInfo};
use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::AliyunpanApi;

/// Talks to the real service through `aliyunpan-api`.
pub struct AliyunpanClient {
    client: Client,
    endpoints: Endpoints,
}

impl AliyunpanClient {
    pub fn new(client: Client) -> Self {
        Self::with_endpoints(client, Endpoints::default())
    }

    pub fn with_endpoints(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl AliyunpanApi for AliyunpanClient {
    #[instrument(skip_all)]
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenInfo, ApiError> {
        aliyunpan_api::refresh_token(&self.client, &self.endpoints, refresh_token).await
    }

    #[instrument(skip_all)]
    async fn sign_in_list(&self, access_token: &str) -> Result<SignInResponse, ApiError> {
        aliyunpan_api::sign_in_list(&self.client, &self.endpoints, access_token).await
    }

    #[instrument(skip(self, access_token))]
    async fn sign_in_reward(&self, access_token: &str, day: u32) -> Result<Reward, ApiError> {
        aliyunpan_api::sign_in_reward(&self.client, &self.endpoints, access_token, day).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        crate::utils::http_client::install_rustls_provider();
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let endpoints = Endpoints::with_bases("http://127.0.0.1:9", "http://127.0.0.1:9");
        let api = AliyunpanClient::with_endpoints(Client::new(), endpoints);

        let err = api.refresh_token("rt").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
