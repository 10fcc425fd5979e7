//! Daily Aliyun Drive sign-in automation.
//!
//! For every configured account the runner exchanges the refresh token for an
//! access token, submits the daily check-in, resolves the reward of each
//! signed day and pushes a Markdown summary to the configured channels.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod notification;
pub mod runner;
pub mod signin;
pub mod utils;

pub use config::{AppConfig, RewardPolicy};
pub use error::{Error, Result};
pub use runner::{AccountOutcome, AccountReport, SignInRunner};
