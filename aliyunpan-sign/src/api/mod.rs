//! Seam between the sign-in pipeline and the upstream service.

mod aliyunpan;

pub use aliyunpan::AliyunpanClient;

use aliyunpan_api::{ApiError, Reward, SignInResponse, TokenInfo};
use async_trait::async_trait;

/// The three upstream calls the pipeline depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliyunpanApi: Send + Sync {
    /// Exchange a refresh token for an access token.
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenInfo, ApiError>;

    /// Submit today's check-in and return the sign-in ledger.
    async fn sign_in_list(&self, access_token: &str) -> Result<SignInResponse, ApiError>;

    /// Fetch the reward granted for `day`.
    async fn sign_in_reward(&self, access_token: &str, day: u32) -> Result<Reward, ApiError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use aliyunpan_api::{ApiError, SignInResponse, TokenInfo};

    /// A parse failure, as produced by an HTML error page.
    pub fn parse_error() -> ApiError {
        ApiError::Json(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
    }

    pub fn token(access_token: &str) -> TokenInfo {
        TokenInfo {
            access_token: access_token.to_string(),
            ..Default::default()
        }
    }

    pub fn sign_in_response(body: &str) -> SignInResponse {
        let mut response: SignInResponse = serde_json::from_str(body).unwrap();
        response.raw = body.to_string();
        response
    }
}
