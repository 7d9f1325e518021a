use serde::Deserialize;

use crate::entity::BotError;

const DEFAULT_COIN: &str = "hype";
const DEFAULT_COIN_ID: &str = "hypec-hype";
const DEFAULT_VS_CURRENCY: &str = "usd";
const DEFAULT_PRICE_API_URL: &str = "https://api.coinpaprika.com/v1";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Connection settings for the snapshot store, supplied as a JSON blob
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreCredentials {
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    1
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub bot_token: String,

    /// Channel id or @username the report is posted to
    pub chat_id: String,

    /// Display symbol used in the message
    pub coin_symbol: String,

    /// Coin id on the price API
    pub coin_id: String,

    /// Quote currency, upper-cased to match the API quote keys
    pub vs_currency: String,

    /// Base URL of the price API
    pub price_api_url: String,

    /// Base URL of the Telegram Bot API
    pub telegram_api_url: String,

    /// Snapshot store, disabled when absent
    pub store: Option<StoreCredentials>,
}

impl Config {
    /// Loads the configuration from environment variables
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as missing
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bot_token = var("BOT_TOKEN").ok_or(BotError::MissingVariable("BOT_TOKEN"))?;
        let chat_id =
            var("CHANNEL_CHAT_ID").ok_or(BotError::MissingVariable("CHANNEL_CHAT_ID"))?;

        let store = match var("SNAPSHOT_STORE_CREDENTIALS_JSON") {
            Some(blob) => Some(serde_json::from_str::<StoreCredentials>(&blob)?),
            None => None,
        };

        Ok(Self {
            bot_token,
            chat_id,
            coin_symbol: var("COIN").unwrap_or_else(|| DEFAULT_COIN.to_string()),
            coin_id: var("COIN_ID").unwrap_or_else(|| DEFAULT_COIN_ID.to_string()),
            vs_currency: var("VS_CURRENCY")
                .unwrap_or_else(|| DEFAULT_VS_CURRENCY.to_string())
                .to_uppercase(),
            price_api_url: var("PRICE_API_URL")
                .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string()),
            telegram_api_url: var("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            store,
        })
    }
}
