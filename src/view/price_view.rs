use crate::entity::{BotError, PriceUpdate};
use crate::utils::{format_delta, format_number, DeltaEmoji};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{error, info, warn};
use std::time::Duration;
use teloxide::{
    prelude::*,
    types::{LinkPreviewOptions, ParseMode, Recipient},
    Bot, RequestError,
};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

const FOOTER_LINKS: &str = "[KOLs](https://t.me/KOL_you_know) | \
[Development](https://www.digisol.agency/?utm_source=telegram&utm_medium=post&utm_campaign=TG+Hype+Price+Bot&utm_id=TG+Hype+Price+Bot) | \
[Subscribe](https://t.me/hype_coin_price)";

#[async_trait]
pub trait PriceView: Send + Sync {
    async fn send_report(&self, text: &str) -> Result<()>;
}

/// Builds the Markdown report for a price update
pub fn compose_price_message(symbol: &str, update: &PriceUpdate) -> String {
    let symbol = symbol.to_uppercase();
    let current = &update.current;
    let previous = update.previous.as_ref();

    let price_delta = format_delta(
        current.price,
        previous.map(|s| s.price),
        DeltaEmoji::PRICE,
    );
    let volume_delta = format_delta(
        current.volume_24h,
        previous.map(|s| s.volume_24h),
        DeltaEmoji::VOLUME,
    );
    let cap_delta = format_delta(
        current.market_cap,
        previous.map(|s| s.market_cap),
        DeltaEmoji::VOLUME,
    );

    format!(
        "💰 {symbol} price {} {}\n\
         📊 {symbol} Vol 24h : {} {}\n\
         💹 {symbol} MCap : {} {}\n\n\
         {}",
        format_number(current.price),
        price_delta,
        format_number(current.volume_24h),
        volume_delta,
        format_number(current.market_cap),
        cap_delta,
        FOOTER_LINKS,
    )
}

pub struct TelegramPriceView {
    bot: Bot,
    recipient: Recipient,
}

// Numeric ids go out as chat ids, anything else as a channel username
fn recipient_for(chat_id: &str) -> Recipient {
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

impl TelegramPriceView {
    pub fn new(api_url: &str, bot_token: &str, chat_id: &str) -> Result<Self> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(SEND_TIMEOUT)
            .build()
            .context("Failed to build Telegram HTTP client")?;
        let api_url = reqwest::Url::parse(api_url)
            .with_context(|| format!("Invalid Telegram API URL: {}", api_url))?;

        Ok(Self {
            bot: Bot::with_client(bot_token, client).set_api_url(api_url),
            recipient: recipient_for(chat_id),
        })
    }
}

#[async_trait]
impl PriceView for TelegramPriceView {
    async fn send_report(&self, text: &str) -> Result<()> {
        let result = self
            .bot
            .send_message(self.recipient.clone(), text)
            .parse_mode(ParseMode::Markdown)
            .link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            })
            .await;

        match result {
            Ok(_) => info!("Report posted to chat {:?}", self.recipient),
            // Rejected by Telegram, nothing to retry
            Err(RequestError::Api(e)) => warn!("Telegram API rejected the report: {}", e),
            Err(e) => {
                error!("Failed to send message to Telegram: {}", e);
                return Err(BotError::Telegram(e).into());
            }
        }

        Ok(())
    }
}
