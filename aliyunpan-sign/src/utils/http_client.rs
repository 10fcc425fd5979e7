use std::sync::OnceLock;

use reqwest::Client;
use tracing::debug;

/// Install the process-wide rustls crypto provider once.
pub fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            // Another crate got there first.
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}

/// Build the HTTP client shared by the API calls and the push channels.
///
/// No request timeout is set; a hung endpoint blocks the run.
pub fn build_client() -> crate::Result<Client> {
    install_rustls_provider();
    let client = Client::builder().build()?;
    Ok(client)
}
