use anyhow::Context;
use mailcaster::api::ApiClient;
use mailcaster::config::Config;
use mailcaster::logger::init_file_logging;
use mailcaster::ui;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_file_logging(&config.logging)?;

    let api = ApiClient::new(config.server_url(), Duration::from_secs(config.server.timeout_seconds))
        .context("failed to build HTTP client")?;

    ui::run_app(config, api).await
}
