//! Check-in submission and ledger processing.

use aliyunpan_api::{SignInResponse, SignInStatus};
use tracing::{debug, error, info, warn};

use super::message::{StatusMessage, day_line, progress_line};
use super::reward::reward_for_record;
use crate::api::AliyunpanApi;
use crate::config::RewardPolicy;

/// Result of one account's check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The access token was rejected (`AccessTokenInvalid`).
    TokenInvalid,
    /// The service answered with another error code.
    Rejected {
        code: String,
        message: Option<String>,
    },
    /// Success code but the ledger is empty.
    EmptyLedger,
    /// The request failed or the body could not be parsed.
    Failed(String),
    /// Ledger processed; the report carries the message to push.
    Completed(SignInReport),
}

/// Processed sign-in ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInReport {
    pub message: StatusMessage,
    /// Current streak length as reported by the service.
    pub sign_in_count: u32,
    /// Number of ledger entries in the current cycle.
    pub total_days: usize,
    pub signed_days: Vec<u32>,
    pub missed_days: Vec<u32>,
}

/// Submits the daily check-in for one access token.
pub struct SignInClient<'a, A: ?Sized> {
    api: &'a A,
    reward_policy: RewardPolicy,
}

impl<'a, A> SignInClient<'a, A>
where
    A: AliyunpanApi + ?Sized,
{
    pub fn new(api: &'a A, reward_policy: RewardPolicy) -> Self {
        Self { api, reward_policy }
    }

    /// Sign in with `access_token` and build the status message.
    pub async fn sign_in(&self, access_token: &str) -> SignInOutcome {
        let response = match self.api.sign_in_list(access_token).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Sign-in request failed");
                return SignInOutcome::Failed(e.to_string());
            }
        };

        if response.is_access_token_invalid() {
            warn!("Access token rejected, check that the refresh token is correct");
            return SignInOutcome::TokenInvalid;
        }

        if let Some(code) = response.code.clone() {
            warn!(code = %code, response = %response.raw, "Sign-in rejected");
            return SignInOutcome::Rejected {
                code,
                message: response.message,
            };
        }

        if response.result.sign_in_logs.is_empty() {
            warn!(response = %response.raw, "Sign-in ledger is empty");
            return SignInOutcome::EmptyLedger;
        }

        SignInOutcome::Completed(self.process_ledger(access_token, &response).await)
    }

    async fn process_ledger(&self, access_token: &str, response: &SignInResponse) -> SignInReport {
        let logs = &response.result.sign_in_logs;
        let sign_in_count = response.result.sign_in_count;

        let mut message = StatusMessage::new();
        let mut signed_days = Vec::new();
        let mut missed_days = Vec::new();

        for (index, record) in logs.iter().enumerate() {
            match record.status() {
                SignInStatus::Empty => {
                    info!(position = index + 1, record = ?record, "Malformed ledger entry");
                    error!(response = %response.raw, "Ledger entry has no status");
                }
                SignInStatus::Miss => missed_days.push(record.day),
                SignInStatus::Normal => {
                    let reward =
                        reward_for_record(self.api, access_token, record, self.reward_policy)
                            .await;
                    let line = day_line(record.day, sign_in_count, &reward);
                    info!("{line}");
                    message.prepend(&line);
                    signed_days.push(record.day);
                }
                SignInStatus::Null => {
                    debug!(day = record.day, "Skipping ledger entry with null status");
                }
                SignInStatus::Other(status) => {
                    debug!(day = record.day, status = %status, "Skipping ledger entry");
                }
            }
        }

        if !missed_days.is_empty() {
            debug!(?missed_days, "Missed sign-in days");
        }

        let progress = progress_line(sign_in_count, logs.len());
        info!("{progress}");
        message.prepend(&progress);

        SignInReport {
            message,
            sign_in_count,
            total_days: logs.len(),
            signed_days,
            missed_days,
        }
    }
}
