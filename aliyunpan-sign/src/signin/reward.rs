//! Reward resolution for signed days.

use aliyunpan_api::{Reward, SignInRecord};
use tracing::error;

use crate::api::AliyunpanApi;
use crate::config::RewardPolicy;

/// Fetch the reward for `day`.
///
/// On failure the error is logged and [`Reward::unavailable`] (`null->null`)
/// is returned, which is distinct from [`Reward::none`].
pub async fn resolve_reward<A>(api: &A, access_token: &str, day: u32) -> Reward
where
    A: AliyunpanApi + ?Sized,
{
    match api.sign_in_reward(access_token, day).await {
        Ok(reward) => reward,
        Err(e) => {
            error!(day, error = %e, "Failed to fetch sign-in reward");
            Reward::unavailable()
        }
    }
}

/// Reward to report for a signed `record` under `policy`.
pub async fn reward_for_record<A>(
    api: &A,
    access_token: &str,
    record: &SignInRecord,
    policy: RewardPolicy,
) -> Reward
where
    A: AliyunpanApi + ?Sized,
{
    match policy {
        RewardPolicy::PreferEmbedded if record.is_reward => {
            record.reward.clone().unwrap_or_else(Reward::none)
        }
        RewardPolicy::AlwaysFetch | RewardPolicy::PreferEmbedded => {
            resolve_reward(api, access_token, record.day).await
        }
    }
}
