//! Daily check-in: ledger processing, reward resolution and message layout.

mod client;
mod message;
mod reward;

pub use client::{SignInClient, SignInOutcome, SignInReport};
pub use message::{NOTIFY_TITLE, StatusMessage, day_line, progress_line};
pub use reward::{resolve_reward, reward_for_record};
