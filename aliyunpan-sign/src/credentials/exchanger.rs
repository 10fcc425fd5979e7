use tracing::{error, info};

use crate::api::AliyunpanApi;

/// Exchange `refresh_token` for a bearer token.
///
/// Returns an empty string on any failure (network, unparsable body, missing
/// `access_token`); the failure is logged here and never surfaces to the
/// caller. No retries.
pub async fn exchange_access_token<A>(api: &A, refresh_token: &str) -> String
where
    A: AliyunpanApi + ?Sized,
{
    match api.refresh_token(refresh_token).await {
        Ok(info) if info.has_access_token() => {
            info!(
                nick_name = %info.nick_name,
                expire_time = %info.expire_time,
                "Access token refreshed"
            );
            info.access_token
        }
        Ok(info) => {
            error!(
                code = info.code.as_deref().unwrap_or_default(),
                message = info.message.as_deref().unwrap_or_default(),
                "Token refresh returned no access token"
            );
            String::new()
        }
        Err(e) => {
            error!(error = %e, "Failed to refresh access token");
            String::new()
        }
    }
}
