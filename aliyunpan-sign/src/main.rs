use std::path::Path;

use aliyunpan_sign::api::AliyunpanClient;
use aliyunpan_sign::notification::Notifier;
use aliyunpan_sign::utils::http_client::build_client;
use aliyunpan_sign::{AppConfig, SignInRunner, config, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _guard = logging::init_logging(
        Path::new(config::DEFAULT_LOG_DIR),
        config::DEFAULT_LOG_FILE,
    )?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return Ok(());
        }
    };

    let client = build_client()?;
    let api = AliyunpanClient::new(client.clone());
    let notifier = Notifier::from_config(&config, client);

    info!(
        accounts = config.accounts.len(),
        channels = notifier.channel_count(),
        reward_policy = ?config.reward_policy,
        "Starting Aliyun Drive sign-in"
    );

    SignInRunner::new(&api, &notifier, config.reward_policy)
        .run(&config.accounts)
        .await;

    Ok(())
}
