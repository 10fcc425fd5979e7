//! Typed bindings for the Aliyun Drive ("aliyunpan") reward sign-in API.
//!
//! Three endpoints are covered:
//! - token refresh (`auth.aliyundrive.com/v2/account/token`)
//! - sign-in list (`member.aliyundrive.com/v1/activity/sign_in_list`)
//! - sign-in reward (`member.aliyundrive.com/v1/activity/sign_in_reward`)
//!
//! Every response type states its defaults at the deserialization boundary, so
//! a partial or reshaped body degrades to empty values instead of failing.
//! Logging policy and orchestration live in the caller.

pub mod endpoints;
pub mod error;
pub mod headers;
pub mod models;
pub mod sign_in;
pub mod token;

mod de;

pub use endpoints::Endpoints;
pub use error::ApiError;
pub use models::{
    Reward, RewardResponse, SignInRecord, SignInResponse, SignInResult, SignInStatus, TokenInfo,
};
pub use sign_in::{sign_in_list, sign_in_reward};
pub use token::refresh_token;
