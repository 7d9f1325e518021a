//! Coin Price Bot - Main executable
//!
//! Fetches the current price, 24h volume and market cap of one coin, compares
//! them with the previous run and posts the result to a Telegram channel.
//! Meant to be started periodically by an external scheduler.
use anyhow::Context;
use coin_price_bot::{Config, PricePresenter, ServiceContainer};
use dotenv::dotenv;
use log::info;

/// Application entry point
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Coin Price Bot v{}", coin_price_bot::VERSION);

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Reporting {} ({}) in {}",
        config.coin_symbol, config.coin_id, config.vs_currency
    );

    let services = ServiceContainer::new(config)
        .await
        .context("Failed to initialize services")?;

    services
        .price_presenter()
        .publish_price_update()
        .await
        .context("Failed to publish price update")?;

    println!("✅ Message sent!");
    Ok(())
}
