//! Refresh-token to access-token exchange.

mod exchanger;

pub use exchanger::exchange_access_token;
