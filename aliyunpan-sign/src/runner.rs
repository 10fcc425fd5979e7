//! Per-account sign-in pipeline.
//!
//! Accounts are processed sequentially in configuration order. Within an
//! account every step depends on the previous one:
//! token exchange -> check-in -> reward lookups -> notification.

use tracing::{Instrument, debug, info, info_span, warn};

use crate::api::AliyunpanApi;
use crate::config::RewardPolicy;
use crate::credentials::exchange_access_token;
use crate::notification::{Delivery, Notifier};
use crate::signin::{NOTIFY_TITLE, SignInClient, SignInOutcome};

/// What happened to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    /// The refresh token could not be exchanged; nothing else ran.
    NoAccessToken,
    /// The check-in ran; `deliveries` is empty unless the outcome was pushed.
    SignedIn {
        outcome: SignInOutcome,
        deliveries: Vec<Delivery>,
    },
}

impl AccountOutcome {
    /// Whether the check-in completed with a ledger.
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            Self::SignedIn {
                outcome: SignInOutcome::Completed(_),
                ..
            }
        )
    }
}

/// Outcome of one account, tagged with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub account: usize,
    pub outcome: AccountOutcome,
}

/// Runs the pipeline for a list of accounts.
pub struct SignInRunner<'a, A: ?Sized> {
    api: &'a A,
    notifier: &'a Notifier,
    reward_policy: RewardPolicy,
}

impl<'a, A> SignInRunner<'a, A>
where
    A: AliyunpanApi + ?Sized,
{
    pub fn new(api: &'a A, notifier: &'a Notifier, reward_policy: RewardPolicy) -> Self {
        Self {
            api,
            notifier,
            reward_policy,
        }
    }

    /// Process every account in order; one account's failure never stops the
    /// next.
    pub async fn run(&self, accounts: &[String]) -> Vec<AccountReport> {
        let mut reports = Vec::with_capacity(accounts.len());

        for (index, refresh_token) in accounts.iter().enumerate() {
            let account = index + 1;
            let outcome = self
                .run_account(refresh_token)
                .instrument(info_span!("account", account))
                .await;
            reports.push(AccountReport { account, outcome });
        }

        let completed = reports.iter().filter(|r| r.outcome.is_completed()).count();
        info!(accounts = reports.len(), completed, "Sign-in run finished");

        reports
    }

    /// Run the pipeline for a single refresh token.
    pub async fn run_account(&self, refresh_token: &str) -> AccountOutcome {
        let access_token = exchange_access_token(self.api, refresh_token).await;
        if access_token.is_empty() {
            warn!("No access token, skipping account");
            return AccountOutcome::NoAccessToken;
        }

        let client = SignInClient::new(self.api, self.reward_policy);
        let outcome = client.sign_in(&access_token).await;

        let deliveries = match &outcome {
            SignInOutcome::Completed(report) => {
                self.notifier
                    .notify(NOTIFY_TITLE, report.message.as_str())
                    .await
            }
            _ => {
                debug!("Nothing to push for this account");
                Vec::new()
            }
        };

        AccountOutcome::SignedIn {
            outcome,
            deliveries,
        }
    }
}
